//! Common types for the store client

use crate::{Result, StoreError, StoreOperation};

/// One page of a ListObjectsV2 response
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Every `<Key>` value, in document order
    pub keys: Vec<String>,
    /// Whether there are more results
    pub is_truncated: bool,
    /// Token for fetching next page
    pub next_continuation_token: Option<String>,
}

/// Markdown notes found under the prefix
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteListing {
    /// Note keys in store order
    pub files: Vec<String>,
    /// Set when the store had more pages than were read
    pub truncated: bool,
}

/// Raw answer of the store to a GET or PUT on a single object
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
    /// ETag, when the store sent one
    pub etag: Option<String>,
}

impl ObjectResponse {
    /// Whether the store reported success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-success answer into [`StoreError::UpstreamStatus`]
    pub fn error_for_status(self, operation: StoreOperation) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(StoreError::UpstreamStatus {
                operation,
                status: self.status,
                body: self.body,
            })
        }
    }
}
