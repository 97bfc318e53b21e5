//! # Notes Gateway
//!
//! HTTP gateway exposing Markdown notes kept in an S3-compatible bucket to a
//! note-taking assistant.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   HTTP Clients                      │
//! │            (assistants, curl, browsers)             │
//! └─────────────────────────┬───────────────────────────┘
//!                           │  JSON
//! ┌─────────────────────────▼───────────────────────────┐
//! │                   Notes Gateway                     │
//! ├─────────────────────────────────────────────────────┤
//! │  Request ID │ Logging │ CORS │ Config validation    │
//! ├─────────────────────────────────────────────────────┤
//! │        / │ /listNotes │ /readNote │ /writeNote      │
//! ├─────────────────────────────────────────────────────┤
//! │                   notes-store                       │
//! │     (Basic auth, ListObjectsV2, GET/PUT object)     │
//! └─────────────────────────┬───────────────────────────┘
//!                           │  S3 REST
//! ┌─────────────────────────▼───────────────────────────┐
//! │            S3-compatible object store               │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{GatewayConfig, UpstreamPolicy};
pub use error::ApiError;
pub use server::run_server;
pub use state::AppState;
