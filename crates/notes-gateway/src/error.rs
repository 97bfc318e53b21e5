//! Error types and their JSON envelopes

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_store::StoreError;
use serde_json::{json, Value};
use thiserror::Error;

/// Body of every unknown-route answer
pub const UNKNOWN_ROUTE: &str = "unknown route";

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unknown route")]
    UnknownRoute,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(e) => match e {
                StoreError::MissingSettings(_) => StatusCode::INTERNAL_SERVER_ERROR,
                StoreError::InvalidKey(_) => StatusCode::BAD_REQUEST,
                StoreError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnknownRoute => StatusCode::NOT_FOUND,
        }
    }

    /// JSON envelope sent to the caller
    pub fn body(&self) -> Value {
        match self {
            Self::Store(StoreError::MissingSettings(missing)) => json!({
                "error": "missing configuration",
                "missing": missing.iter().map(|s| s.env_var()).collect::<Vec<_>>(),
            }),
            Self::Store(StoreError::InvalidKey(reason)) => json!({
                "error": "bad request",
                "message": format!("invalid filename: {}", reason),
            }),
            Self::Store(StoreError::UpstreamStatus {
                operation,
                status,
                body,
            }) => json!({
                "error": format!("upstream {} failed", operation),
                "status": status,
                "details": body,
            }),
            Self::Store(e) => json!({
                "error": "unexpected error",
                "message": e.to_string(),
            }),
            Self::BadRequest(message) => json!({
                "error": "bad request",
                "message": message,
            }),
            Self::PayloadTooLarge(message) => json!({
                "error": "payload too large",
                "message": message,
            }),
            Self::UnknownRoute => json!({ "error": UNKNOWN_ROUTE }),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            let upstream_status = match &self {
                Self::Store(e) => e.upstream_status(),
                _ => None,
            };
            tracing::error!(
                error = %self,
                status = status.as_u16(),
                upstream_status = ?upstream_status,
                "Request failed"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}
