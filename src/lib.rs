//! api-responser: uniform JSON success/error envelopes with localized messages for axum handlers.

pub mod config;
pub mod count;
pub mod error;
pub mod message;
pub mod operation;
pub mod render;
pub mod report;
pub mod responder;
pub mod response;

pub use config::{ResponderConfig, TemplateOrigin, TemplateSource, DEFAULT_LOCALE};
pub use count::records_count;
pub use error::{ConfigError, ReportError, ResponseError};
pub use message::{Detail, FullMessages, MessageResolver};
pub use operation::{Operation, StatusCategory};
pub use render::{Renderer, TemplateKind};
pub use report::{FailureReport, FailureReporter, TracingReporter};
pub use responder::{ErrorContext, Responder};
pub use response::ApiResponse;
