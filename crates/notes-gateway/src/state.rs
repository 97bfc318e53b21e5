//! Application state

use crate::config::GatewayConfig;
use crate::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};
use notes_store::NoteStore;
use reqwest::{header, Client};
use std::sync::Arc;
use tracing::warn;

/// Application state shared across handlers.
///
/// Holds nothing mutable: the store settings are validated again on every
/// request and the HTTP client is only a connection pool.
pub struct AppState {
    /// Gateway configuration
    pub config: GatewayConfig,
    /// Outbound HTTP client
    pub http: Client,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let missing = config.store.missing();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|s| s.env_var()).collect();
            warn!(
                missing = %names.join(", "),
                "Store configuration incomplete; note routes will answer with a configuration error"
            );
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("notes-gateway/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            http: builder.build()?,
        })
    }
}

/// A note store built from freshly validated settings.
///
/// Extracting it rejects the request with the configuration error before any
/// call to the object store is made.
pub struct ConfiguredStore(pub NoteStore);

impl FromRequestParts<Arc<AppState>> for ConfiguredStore {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let config = state.config.store.validate()?;
        Ok(Self(NoteStore::with_client(config, state.http.clone())))
    }
}
