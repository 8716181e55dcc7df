//! Rendered response: envelope body paired with its HTTP status.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// Rendered envelope; `None` for created/updated/deleted.
    pub body: Option<String>,
    pub status: StatusCode,
}

impl ApiResponse {
    pub fn json(status: StatusCode, body: String) -> Self {
        Self {
            body: Some(body),
            status,
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self { body: None, status }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
            None => self.status.into_response(),
        }
    }
}
