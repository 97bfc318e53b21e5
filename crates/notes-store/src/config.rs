//! Store configuration and validation

use crate::{Result, StoreError};
use std::fmt;

/// Region tag sent when none is configured
pub const DEFAULT_REGION: &str = "eu1";

/// A required store setting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Setting {
    Endpoint,
    Bucket,
    AccessKey,
    SecretKey,
}

impl Setting {
    /// Environment variable the setting is read from
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Endpoint => "STORJ_ENDPOINT",
            Self::Bucket => "STORJ_BUCKET",
            Self::AccessKey => "STORJ_ACCESS_KEY",
            Self::SecretKey => "STORJ_SECRET_KEY",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Raw store settings, as injected by the environment.
///
/// Nothing here is checked until [`StoreSettings::validate`] runs, which the
/// gateway does for every request.
#[derive(Clone, Debug, Default)]
pub struct StoreSettings {
    /// Object store endpoint URL
    pub endpoint: Option<String>,
    /// Bucket name
    pub bucket: Option<String>,
    /// Key prefix ("folder") inside the bucket
    pub prefix: Option<String>,
    /// Access key
    pub access_key: Option<String>,
    /// Secret key
    pub secret_key: Option<String>,
    /// Region tag
    pub region: Option<String>,
    /// Maximum number of listing pages followed per request
    pub max_list_pages: usize,
}

impl StoreSettings {
    /// Create empty settings
    pub fn new() -> Self {
        Self {
            max_list_pages: 1,
            ..Default::default()
        }
    }

    /// Set endpoint, bucket and credentials in one go
    pub fn with_credentials(
        mut self,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.endpoint = Some(endpoint.into());
        self.bucket = Some(bucket.into());
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set the key prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the region tag
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set how many listing pages to follow
    pub fn with_max_list_pages(mut self, pages: usize) -> Self {
        self.max_list_pages = pages;
        self
    }

    /// Settings that are missing or blank, in a fixed order
    pub fn missing(&self) -> Vec<Setting> {
        [
            (Setting::Endpoint, &self.endpoint),
            (Setting::Bucket, &self.bucket),
            (Setting::AccessKey, &self.access_key),
            (Setting::SecretKey, &self.secret_key),
        ]
        .into_iter()
        .filter(|(_, value)| non_blank(value).is_none())
        .map(|(setting, _)| setting)
        .collect()
    }

    /// Check the required settings and build a [`StoreConfig`]
    pub fn validate(&self) -> Result<StoreConfig> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(StoreError::MissingSettings(missing));
        }

        // `missing()` was empty, so every required value is present
        let required = |value: &Option<String>| non_blank(value).unwrap_or_default().to_string();

        Ok(StoreConfig {
            endpoint: required(&self.endpoint).trim_end_matches('/').to_string(),
            bucket: required(&self.bucket).trim_matches('/').to_string(),
            prefix: self
                .prefix
                .as_deref()
                .map(|p| p.trim().trim_matches('/').to_string())
                .unwrap_or_default(),
            access_key: required(&self.access_key),
            secret_key: required(&self.secret_key),
            region: non_blank(&self.region).unwrap_or(DEFAULT_REGION).to_string(),
            max_list_pages: self.max_list_pages.max(1),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Validated store configuration
#[derive(Clone)]
pub struct StoreConfig {
    /// Endpoint URL without trailing slash
    pub endpoint: String,
    /// Bucket name
    pub bucket: String,
    /// Key prefix without surrounding slashes, possibly empty
    pub prefix: String,
    /// Access key
    pub access_key: String,
    /// Secret key
    pub secret_key: String,
    /// Region tag
    pub region: String,
    /// Maximum number of listing pages followed per request (at least 1)
    pub max_list_pages: usize,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("max_list_pages", &self.max_list_pages)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> StoreSettings {
        StoreSettings::new().with_credentials("https://example.com", "bucket", "access", "secret")
    }

    #[test]
    fn test_defaults_applied() {
        let config = complete().validate().unwrap();
        assert_eq!(config.region, "eu1");
        assert_eq!(config.prefix, "");
        assert_eq!(config.max_list_pages, 1);
    }

    #[test]
    fn test_reports_every_missing_setting() {
        let mut settings = complete();
        settings.bucket = None;
        settings.secret_key = Some("   ".to_string());

        match settings.validate() {
            Err(StoreError::MissingSettings(missing)) => {
                assert_eq!(missing, vec![Setting::Bucket, Setting::SecretKey]);
            }
            other => panic!("expected MissingSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_settings_miss_all_four() {
        assert_eq!(StoreSettings::new().missing().len(), 4);
    }

    #[test]
    fn test_normalizes_slashes() {
        let config = StoreSettings::new()
            .with_credentials("https://example.com//", "/bucket", "access", "secret")
            .with_prefix("/notes/")
            .with_region("us1")
            .validate()
            .unwrap();

        assert_eq!(config.endpoint, "https://example.com");
        assert_eq!(config.bucket, "bucket");
        assert_eq!(config.prefix, "notes");
        assert_eq!(config.region, "us1");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = complete().validate().unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("\"secret\""));
        assert!(printed.contains("<redacted>"));
    }
}
