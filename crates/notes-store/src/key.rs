//! Note keys
//!
//! A filename coming from a client is resolved to an object key under the
//! configured prefix. Filenames that could escape the prefix or produce an
//! ambiguous key are rejected.

use crate::{Result, StoreError};
use std::fmt;

/// S3 object keys are limited to 1024 bytes
pub const MAX_KEY_LEN: usize = 1024;

/// Suffix identifying Markdown notes
pub const NOTE_SUFFIX: &str = ".md";

/// An object key addressing a single note
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteKey(String);

impl NoteKey {
    /// Resolve `filename` under `prefix`.
    ///
    /// A filename already starting with `<prefix>/`, as returned by a listing,
    /// is kept as-is.
    pub fn resolve(prefix: &str, filename: &str) -> Result<Self> {
        validate_filename(filename)?;

        let key = if prefix.is_empty() || is_under(prefix, filename) {
            filename.to_string()
        } else {
            format!("{}/{}", prefix, filename)
        };

        if key.len() > MAX_KEY_LEN {
            return Err(StoreError::InvalidKey(format!(
                "key exceeds {} bytes",
                MAX_KEY_LEN
            )));
        }

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key split into URL path segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a listed key is a Markdown note
pub fn is_note(key: &str) -> bool {
    key.len() > NOTE_SUFFIX.len() && key.ends_with(NOTE_SUFFIX)
}

fn is_under(prefix: &str, filename: &str) -> bool {
    filename
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn validate_filename(filename: &str) -> Result<()> {
    let invalid = |reason: &str| -> Result<()> { Err(StoreError::InvalidKey(reason.to_string())) };

    if filename.trim().is_empty() {
        return invalid("filename must not be empty");
    }
    if filename.starts_with('/') {
        return invalid("filename must be relative");
    }
    if filename.contains('\\') || filename.chars().any(char::is_control) {
        return invalid("filename contains forbidden characters");
    }
    if filename
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return invalid("filename contains an empty or relative path segment");
    }

    Ok(())
}
