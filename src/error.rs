//! Typed errors and HTTP mapping.

use crate::operation::StatusCategory;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::PathBuf;
use thiserror::Error;

/// Startup-time faults: locale tables and templates that cannot be loaded or used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid locale table '{locale}': {source}")]
    InvalidLocale {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("missing translation: locale '{locale}' key '{key}'")]
    MissingTranslation { locale: String, key: String },
    #[error("template {name}: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },
    #[error("template {name} does not render JSON: {reason}")]
    TemplateOutput { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("render {name} envelope: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: Box<handlebars::RenderError>,
    },
    #[error("operation {operation} is not a {expected} operation")]
    CategoryMismatch {
        operation: &'static str,
        expected: StatusCategory,
    },
}

/// Returned by failure reporters. Logged and dropped, never sent to the client.
#[derive(Error, Debug)]
#[error("failure report: {0}")]
pub struct ReportError(pub String);

/// Plain 500 built without templates or locale tables. The message is fixed
/// English because this path runs after one of those has already failed.
impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to build api response");
        let body = serde_json::json!({
            "status": StatusCategory::Error.as_str(),
            "code": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            "message": "internal server error"
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
