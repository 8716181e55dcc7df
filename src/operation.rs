//! Static operation table: HTTP status, status category and message key per operation.

use axum::http::StatusCode;
use serde::Serialize;
use std::fmt;

/// Coarse outcome class. Doubles as the `status` field of the envelope and as
/// the middle segment of the localization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Success,
    Error,
}

impl StatusCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Error => "error",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    RecordIndex,
    RecordShow,
    RecordCreated,
    RecordUpdated,
    RecordDeleted,
    PageNotFound,
    RecordNotFound,
    RecordNotCreated,
    RecordNotUpdated,
    RecordNotDeleted,
    BadRequest,
    Unauthorized,
    Forbidden,
    InternalServerError,
    MethodNotAllowed,
    NotAcceptable,
    Conflict,
    Gone,
    UnsupportedMediaType,
    TooManyRequests,
    NotImplemented,
    ServiceUnavailable,
}

impl Operation {
    pub const ALL: [Operation; 22] = [
        Operation::RecordIndex,
        Operation::RecordShow,
        Operation::RecordCreated,
        Operation::RecordUpdated,
        Operation::RecordDeleted,
        Operation::PageNotFound,
        Operation::RecordNotFound,
        Operation::RecordNotCreated,
        Operation::RecordNotUpdated,
        Operation::RecordNotDeleted,
        Operation::BadRequest,
        Operation::Unauthorized,
        Operation::Forbidden,
        Operation::InternalServerError,
        Operation::MethodNotAllowed,
        Operation::NotAcceptable,
        Operation::Conflict,
        Operation::Gone,
        Operation::UnsupportedMediaType,
        Operation::TooManyRequests,
        Operation::NotImplemented,
        Operation::ServiceUnavailable,
    ];

    pub fn status(self) -> StatusCode {
        match self {
            Operation::RecordIndex | Operation::RecordShow => StatusCode::OK,
            Operation::RecordCreated => StatusCode::CREATED,
            Operation::RecordUpdated | Operation::RecordDeleted => StatusCode::NO_CONTENT,
            Operation::PageNotFound | Operation::RecordNotFound => StatusCode::NOT_FOUND,
            Operation::RecordNotCreated | Operation::RecordNotUpdated => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Operation::RecordNotDeleted | Operation::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Operation::BadRequest => StatusCode::BAD_REQUEST,
            Operation::Unauthorized => StatusCode::UNAUTHORIZED,
            Operation::Forbidden => StatusCode::FORBIDDEN,
            Operation::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Operation::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Operation::Conflict => StatusCode::CONFLICT,
            Operation::Gone => StatusCode::GONE,
            Operation::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Operation::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Operation::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Operation::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn category(self) -> StatusCategory {
        match self {
            Operation::RecordIndex
            | Operation::RecordShow
            | Operation::RecordCreated
            | Operation::RecordUpdated
            | Operation::RecordDeleted => StatusCategory::Success,
            _ => StatusCategory::Error,
        }
    }

    /// Snake-case operation name, the last segment of the localization key.
    pub fn key(self) -> &'static str {
        match self {
            Operation::RecordIndex => "record_index",
            Operation::RecordShow => "record_show",
            Operation::RecordCreated => "record_created",
            Operation::RecordUpdated => "record_updated",
            Operation::RecordDeleted => "record_deleted",
            Operation::PageNotFound => "page_not_found",
            Operation::RecordNotFound => "record_not_found",
            Operation::RecordNotCreated => "record_not_created",
            Operation::RecordNotUpdated => "record_not_updated",
            Operation::RecordNotDeleted => "record_not_deleted",
            Operation::BadRequest => "bad_request",
            Operation::Unauthorized => "unauthorized",
            Operation::Forbidden => "forbidden",
            Operation::InternalServerError => "internal_server_error",
            Operation::MethodNotAllowed => "method_not_allowed",
            Operation::NotAcceptable => "not_acceptable",
            Operation::Conflict => "conflict",
            Operation::Gone => "gone",
            Operation::UnsupportedMediaType => "unsupported_media_type",
            Operation::TooManyRequests => "too_many_requests",
            Operation::NotImplemented => "not_implemented",
            Operation::ServiceUnavailable => "service_unavailable",
        }
    }

    /// Full localization key, e.g. `api_responser.error.record_not_found`.
    pub fn message_key(self) -> String {
        format!("api_responser.{}.{}", self.category(), self.key())
    }

    /// Created/updated/deleted answer with a bare status and no envelope.
    pub fn has_body(self) -> bool {
        !matches!(
            self,
            Operation::RecordCreated | Operation::RecordUpdated | Operation::RecordDeleted
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
