//! Request authentication for the object store

use crate::config::StoreConfig;
use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

/// Header carrying the region tag, used by some S3-compatible providers for routing
pub const REGION_HEADER: HeaderName = HeaderName::from_static("x-amz-bucket-region");

/// Build a `Basic` authorization value from an access/secret key pair
pub fn basic_authorization(access_key: &str, secret_key: &str) -> String {
    let credentials = format!("{}:{}", access_key, secret_key);
    format!("Basic {}", general_purpose::STANDARD.encode(credentials))
}

/// Headers attached to every outbound request
pub fn auth_headers(config: &StoreConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();

    // Values that are not valid header text are skipped; the store then answers 401/403
    if let Ok(mut value) =
        HeaderValue::from_str(&basic_authorization(&config.access_key, &config.secret_key))
    {
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    if let Ok(value) = HeaderValue::from_str(&config.region) {
        headers.insert(REGION_HEADER, value);
    }

    headers
}
