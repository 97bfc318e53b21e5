//! Service-level handlers (status, unknown routes)

use crate::error::ApiError;
use axum::Json;
use serde::Serialize;

/// Message returned by `/`
pub const STATUS_MESSAGE: &str = "notes gateway is running";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
}

/// ANY / - Status check, never touches the store
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE,
    })
}

/// Fallback for every other path and method, configured or not
pub async fn unknown_route() -> ApiError {
    ApiError::UnknownRoute
}
