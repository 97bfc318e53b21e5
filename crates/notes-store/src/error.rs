//! Store error types

use crate::config::Setting;
use std::fmt;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, StoreError>;

/// Object store operation, used to label upstream failures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Read,
    Write,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "listing",
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Required settings are missing or blank
    #[error("Missing configuration: {}", join_settings(.0))]
    MissingSettings(Vec<Setting>),

    /// Endpoint is not a usable base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Filename cannot be turned into a key under the prefix
    #[error("Invalid filename: {0}")]
    InvalidKey(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store answered with a non-success status
    #[error("Upstream {operation} failed with status {status}")]
    UpstreamStatus {
        operation: StoreOperation,
        status: u16,
        body: String,
    },

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    XmlParse(String),
}

impl StoreError {
    /// Upstream status code, if the store answered
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for StoreError {
    fn from(e: quick_xml::Error) -> Self {
        Self::XmlParse(e.to_string())
    }
}

fn join_settings(settings: &[Setting]) -> String {
    settings
        .iter()
        .map(Setting::env_var)
        .collect::<Vec<_>>()
        .join(", ")
}
