//! Failure reporting for error responses that opt in.

use crate::error::ReportError;
use axum::http::StatusCode;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// What a reporter sees. `debug_message` never reaches the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailureReport<'a> {
    pub code: StatusCode,
    pub message: &'a str,
    pub debug_message: &'a str,
}

pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &FailureReport<'_>) -> Result<(), ReportError>;
}

/// Default reporter: one `error`-level tracing event per report.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, failure: &FailureReport<'_>) -> Result<(), ReportError> {
        tracing::error!(
            code = failure.code.as_u16(),
            message = failure.message,
            debug_message = failure.debug_message,
            "Error with code {}. Debug message: {}. Message: {}",
            failure.code.as_u16(),
            failure.debug_message,
            failure.message
        );
        Ok(())
    }
}

/// Run the reporter; a failed or panicking report is logged and dropped.
pub(crate) fn dispatch(reporter: &dyn FailureReporter, failure: &FailureReport<'_>) {
    match panic::catch_unwind(AssertUnwindSafe(|| reporter.report(failure))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::warn!(error = %e, code = failure.code.as_u16(), "failure reporter failed");
        }
        Err(payload) => {
            tracing::warn!(
                panic = panic_message(payload.as_ref()),
                code = failure.code.as_u16(),
                "failure reporter panicked"
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
