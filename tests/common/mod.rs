//! Shared fixtures for integration tests.

#![allow(dead_code)]

use api_responser::{FailureReport, FailureReporter, ReportError, Responder, ResponderConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Serialize, Clone)]
pub struct Person {
    pub id: u64,
    pub name: String,
}

impl Person {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Config whose template override dir does not exist, so bundled templates are used
/// regardless of the working directory.
pub fn config() -> ResponderConfig {
    ResponderConfig {
        templates_dir: PathBuf::from("/nonexistent/api_responser/templates"),
        ..ResponderConfig::default()
    }
}

pub fn responder() -> Responder {
    Responder::new(&config()).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reported {
    pub code: u16,
    pub message: String,
    pub debug_message: String,
}

#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<Reported>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<Reported> {
        self.reports.lock().unwrap().clone()
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, failure: &FailureReport<'_>) -> Result<(), ReportError> {
        self.reports.lock().unwrap().push(Reported {
            code: failure.code.as_u16(),
            message: failure.message.to_string(),
            debug_message: failure.debug_message.to_string(),
        });
        Ok(())
    }
}

/// Records the call, then fails.
#[derive(Default)]
pub struct FailingReporter {
    pub calls: Mutex<usize>,
}

impl FailureReporter for FailingReporter {
    fn report(&self, _failure: &FailureReport<'_>) -> Result<(), ReportError> {
        *self.calls.lock().unwrap() += 1;
        Err(ReportError("sink unavailable".into()))
    }
}

pub fn recording_responder() -> (Responder, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let responder = Responder::with_reporter(&config(), reporter.clone()).unwrap();
    (responder, reporter)
}

/// Records the call, then panics.
#[derive(Default)]
pub struct PanickingReporter {
    pub calls: Mutex<usize>,
}

impl FailureReporter for PanickingReporter {
    fn report(&self, _failure: &FailureReport<'_>) -> Result<(), ReportError> {
        *self.calls.lock().unwrap() += 1;
        panic!("report sink exploded");
    }
}
