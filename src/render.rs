//! Envelope rendering through the success/error templates.
//!
//! Every field is JSON-encoded before it reaches the template, so templates
//! only position values and never need escaping helpers. HTML escaping is off.

use crate::config::TemplateSource;
use crate::error::{ConfigError, ResponseError};
use crate::operation::StatusCategory;
use axum::http::StatusCode;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Success,
    Error,
}

impl TemplateKind {
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Success => "success",
            TemplateKind::Error => "error",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json.hbs", self.name())
    }

    pub fn bundled(self) -> &'static str {
        match self {
            TemplateKind::Success => include_str!("../templates/success.json.hbs"),
            TemplateKind::Error => include_str!("../templates/error.json.hbs"),
        }
    }
}

#[derive(Serialize)]
struct EnvelopeFields {
    status: String,
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records_count: Option<String>,
}

impl EnvelopeFields {
    fn new(category: StatusCategory, code: StatusCode, message: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status: serde_json::to_string(category.as_str())?,
            code: code.as_u16().to_string(),
            message: serde_json::to_string(message)?,
            records: None,
            records_count: None,
        })
    }
}

/// Compiled success and error templates. Immutable after construction.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compile both templates and probe-render each one; output must parse as JSON.
    pub fn new(success: &TemplateSource, error: &TemplateSource) -> Result<Self, ConfigError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        for source in [success, error] {
            let name = source.kind.name();
            registry
                .register_template_string(name, source.body.trim_end())
                .map_err(|e| ConfigError::Template {
                    name,
                    source: Box::new(e),
                })?;
        }
        let renderer = Self { registry };
        renderer.probe(TemplateKind::Success)?;
        renderer.probe(TemplateKind::Error)?;
        Ok(renderer)
    }

    fn probe(&self, kind: TemplateKind) -> Result<(), ConfigError> {
        let name = kind.name();
        let rendered = match kind {
            TemplateKind::Success => self.success(StatusCode::OK, "probe", &Value::Null, 0),
            TemplateKind::Error => self.error(StatusCode::INTERNAL_SERVER_ERROR, "probe"),
        }
        .map_err(|e| ConfigError::TemplateOutput {
            name,
            reason: e.to_string(),
        })?;
        serde_json::from_str::<Value>(&rendered).map_err(|e| ConfigError::TemplateOutput {
            name,
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn success(
        &self,
        code: StatusCode,
        message: &str,
        records: &Value,
        records_count: u64,
    ) -> Result<String, ResponseError> {
        let mut fields = EnvelopeFields::new(StatusCategory::Success, code, message)?;
        fields.records = Some(serde_json::to_string(records)?);
        fields.records_count = Some(records_count.to_string());
        self.render(TemplateKind::Success, &fields)
    }

    pub fn error(&self, code: StatusCode, message: &str) -> Result<String, ResponseError> {
        let fields = EnvelopeFields::new(StatusCategory::Error, code, message)?;
        self.render(TemplateKind::Error, &fields)
    }

    fn render(&self, kind: TemplateKind, fields: &EnvelopeFields) -> Result<String, ResponseError> {
        self.registry
            .render(kind.name(), fields)
            .map_err(|e| ResponseError::Render {
                name: kind.name(),
                source: Box::new(e),
            })
    }
}
