//! Gateway configuration

use notes_store::StoreSettings;
use std::time::Duration;

/// What to do when the store answers a read or write with a non-success status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpstreamPolicy {
    /// Report the failure to the caller as a gateway error
    #[default]
    Strict,
    /// Forward the store's body as note content and report writes as saved
    Lenient,
}

/// Gateway server configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Object store settings, validated per request
    pub store: StoreSettings,
    /// Read/write upstream status handling
    pub upstream_policy: UpstreamPolicy,
    /// Timeout for calls to the object store
    pub upstream_timeout: Option<Duration>,
    /// Maximum request body size (bytes)
    pub max_body_size: usize,
    /// Enable CORS
    pub cors_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            store: StoreSettings::new(),
            upstream_policy: UpstreamPolicy::default(),
            upstream_timeout: None,
            max_body_size: 10 * 1024 * 1024, // 10 MB
            cors_enabled: true,
        }
    }
}

impl GatewayConfig {
    /// Get the bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
