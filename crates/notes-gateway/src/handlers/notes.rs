//! Note handlers (list, read, write)

use crate::config::UpstreamPolicy;
use crate::error::ApiError;
use crate::state::{AppState, ConfiguredStore};
use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;
use notes_store::StoreOperation;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;

/// POST /readNote body
#[derive(Debug, Deserialize)]
pub struct ReadNoteRequest {
    pub filename: String,
}

/// POST /writeNote body
#[derive(Debug, Deserialize)]
pub struct WriteNoteRequest {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListNotesResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadNoteResponse {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteNoteResponse {
    pub success: bool,
    pub message: String,
}

impl WriteNoteResponse {
    pub fn saved(filename: &str) -> Self {
        Self {
            success: true,
            message: format!("{} sauvegardée.", filename),
        }
    }
}

/// ANY /listNotes
pub async fn list_notes(
    ConfiguredStore(store): ConfiguredStore,
) -> Result<Json<ListNotesResponse>, ApiError> {
    let listing = store.list_notes().await?;
    tracing::debug!(count = listing.files.len(), truncated = listing.truncated, "Listed notes");

    Ok(Json(ListNotesResponse {
        files: listing.files,
    }))
}

/// POST /readNote
pub async fn read_note(
    State(state): State<Arc<AppState>>,
    ConfiguredStore(store): ConfiguredStore,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ReadNoteResponse>, ApiError> {
    let request: ReadNoteRequest = parse_body(&body?)?;
    let mut response = store.read_note(&request.filename).await?;

    if state.config.upstream_policy == UpstreamPolicy::Strict {
        response = response.error_for_status(StoreOperation::Read)?;
    } else if !response.is_success() {
        tracing::warn!(
            filename = %request.filename,
            status = response.status,
            "Forwarding failed read as note content"
        );
    }

    Ok(Json(ReadNoteResponse {
        content: response.body,
    }))
}

/// POST /writeNote
pub async fn write_note(
    State(state): State<Arc<AppState>>,
    ConfiguredStore(store): ConfiguredStore,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WriteNoteResponse>, ApiError> {
    let request: WriteNoteRequest = parse_body(&body?)?;
    let response = store.write_note(&request.filename, request.content).await?;

    let response = if state.config.upstream_policy == UpstreamPolicy::Strict {
        response.error_for_status(StoreOperation::Write)?
    } else {
        if !response.is_success() {
            tracing::warn!(
                filename = %request.filename,
                status = response.status,
                "Store rejected write; reporting success anyway"
            );
        }
        response
    };

    tracing::info!(filename = %request.filename, etag = ?response.etag, "Note saved");
    Ok(Json(WriteNoteResponse::saved(&request.filename)))
}

/// Parse a JSON request body into its typed record
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(e.to_string()))
}
