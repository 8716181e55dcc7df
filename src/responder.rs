//! Response facade: one method per operation, each returning a rendered `ApiResponse`.
//!
//! A `Responder` is built once at startup and handed to handlers (typically as
//! axum state). Clones share the same immutable locale tables, templates and
//! reporter.

use crate::config::{load_locales, load_template, ResponderConfig};
use crate::count::records_count;
use crate::error::{ConfigError, ResponseError};
use crate::message::{Detail, MessageResolver};
use crate::operation::{Operation, StatusCategory};
use crate::render::{Renderer, TemplateKind};
use crate::report::{self, FailureReport, FailureReporter, TracingReporter};
use crate::response::ApiResponse;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Debug message and report flag attached to an error operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Passed to the reporter only.
    pub debug_message: String,
    pub report: bool,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(debug_message: impl Into<String>) -> Self {
        Self {
            debug_message: debug_message.into(),
            report: false,
        }
    }

    /// Invoke the failure reporter before rendering.
    pub fn reported(mut self) -> Self {
        self.report = true;
        self
    }
}

struct Shared {
    messages: MessageResolver,
    renderer: Renderer,
    reporter: Arc<dyn FailureReporter>,
}

#[derive(Clone)]
pub struct Responder {
    shared: Arc<Shared>,
    locale: Arc<str>,
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder").field("locale", &self.locale).finish_non_exhaustive()
    }
}

impl Responder {
    /// Load locales and templates once; failures here are configuration defects.
    pub fn new(config: &ResponderConfig) -> Result<Self, ConfigError> {
        Self::with_reporter(config, Arc::new(TracingReporter))
    }

    pub fn with_reporter(config: &ResponderConfig, reporter: Arc<dyn FailureReporter>) -> Result<Self, ConfigError> {
        let messages = MessageResolver::new(load_locales(config)?, &config.default_locale)?;
        let renderer = Renderer::new(
            &load_template(config, TemplateKind::Success)?,
            &load_template(config, TemplateKind::Error)?,
        )?;
        tracing::debug!(default_locale = %config.default_locale, "api responder ready");
        Ok(Self {
            locale: Arc::from(config.default_locale.as_str()),
            shared: Arc::new(Shared {
                messages,
                renderer,
                reporter,
            }),
        })
    }

    /// Same tables and templates, messages resolved for `locale`.
    pub fn with_locale(&self, locale: impl AsRef<str>) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            locale: Arc::from(locale.as_ref()),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Render any success operation. Body-less operations ignore `records`.
    pub fn success<T: Serialize + ?Sized>(
        &self,
        operation: Operation,
        records: Option<&T>,
        explicit_count: Option<u64>,
    ) -> Result<ApiResponse, ResponseError> {
        expect_category(operation, StatusCategory::Success)?;
        let status = operation.status();
        if !operation.has_body() {
            return Ok(ApiResponse::empty(status));
        }
        let records = match records {
            Some(r) => serde_json::to_value(r)?,
            None => Value::Null,
        };
        let count = records_count(&records, explicit_count);
        let message = self.shared.messages.resolve(&self.locale, operation, &Detail::None)?;
        let body = self.shared.renderer.success(status, &message, &records, count)?;
        Ok(ApiResponse::json(status, body))
    }

    /// Render any error operation, reporting first when `context.report` is set.
    pub fn error(
        &self,
        operation: Operation,
        detail: impl Into<Detail>,
        context: ErrorContext,
    ) -> Result<ApiResponse, ResponseError> {
        expect_category(operation, StatusCategory::Error)?;
        let status = operation.status();
        let message = self.shared.messages.resolve(&self.locale, operation, &detail.into())?;
        if context.report {
            report::dispatch(
                self.shared.reporter.as_ref(),
                &FailureReport {
                    code: status,
                    message: &message,
                    debug_message: &context.debug_message,
                },
            );
        }
        let body = self.shared.renderer.error(status, &message)?;
        Ok(ApiResponse::json(status, body))
    }

    // Success responses

    pub fn record_index<T: Serialize + ?Sized>(
        &self,
        records: &T,
        records_count: Option<u64>,
    ) -> Result<ApiResponse, ResponseError> {
        self.success(Operation::RecordIndex, Some(records), records_count)
    }

    pub fn record_show<T: Serialize>(&self, record: Option<&T>) -> Result<ApiResponse, ResponseError> {
        self.success(Operation::RecordShow, record, None)
    }

    pub fn record_created(&self) -> ApiResponse {
        ApiResponse::empty(Operation::RecordCreated.status())
    }

    pub fn record_updated(&self) -> ApiResponse {
        ApiResponse::empty(Operation::RecordUpdated.status())
    }

    pub fn record_deleted(&self) -> ApiResponse {
        ApiResponse::empty(Operation::RecordDeleted.status())
    }

    // Error responses

    pub fn page_not_found(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::PageNotFound, Detail::None, ErrorContext::new())
    }

    pub fn record_not_found(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::RecordNotFound, Detail::None, ErrorContext::new())
    }

    pub fn record_not_created(
        &self,
        detail: impl Into<Detail>,
        context: ErrorContext,
    ) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::RecordNotCreated, detail, context)
    }

    pub fn record_not_updated(
        &self,
        detail: impl Into<Detail>,
        context: ErrorContext,
    ) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::RecordNotUpdated, detail, context)
    }

    pub fn record_not_deleted(
        &self,
        detail: impl Into<Detail>,
        context: ErrorContext,
    ) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::RecordNotDeleted, detail, context)
    }

    pub fn bad_request(&self, context: ErrorContext) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::BadRequest, Detail::None, context)
    }

    pub fn unauthorized(&self, context: ErrorContext) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::Unauthorized, Detail::None, context)
    }

    pub fn forbidden(&self, context: ErrorContext) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::Forbidden, Detail::None, context)
    }

    pub fn internal_server_error(&self, context: ErrorContext) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::InternalServerError, Detail::None, context)
    }

    pub fn method_not_allowed(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::MethodNotAllowed, Detail::None, ErrorContext::new())
    }

    pub fn not_acceptable(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::NotAcceptable, Detail::None, ErrorContext::new())
    }

    pub fn conflict(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::Conflict, Detail::None, ErrorContext::new())
    }

    pub fn gone(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::Gone, Detail::None, ErrorContext::new())
    }

    pub fn unsupported_media_type(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::UnsupportedMediaType, Detail::None, ErrorContext::new())
    }

    pub fn too_many_requests(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::TooManyRequests, Detail::None, ErrorContext::new())
    }

    pub fn not_implemented(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::NotImplemented, Detail::None, ErrorContext::new())
    }

    pub fn service_unavailable(&self) -> Result<ApiResponse, ResponseError> {
        self.error(Operation::ServiceUnavailable, Detail::None, ErrorContext::new())
    }
}

fn expect_category(operation: Operation, expected: StatusCategory) -> Result<(), ResponseError> {
    if operation.category() == expected {
        Ok(())
    } else {
        Err(ResponseError::CategoryMismatch {
            operation: operation.key(),
            expected,
        })
    }
}
