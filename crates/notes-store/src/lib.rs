//! # Notes Store
//!
//! Client for Markdown notes kept in an S3-compatible bucket (Storj and
//! friends), addressed by endpoint, bucket and key prefix.
//!
//! ## Features
//!
//! - **Configuration**: raw settings validated into a [`StoreConfig`], reporting
//!   every missing setting at once
//! - **Authentication**: `Basic` credentials plus a region header on every request
//! - **Listing**: ListObjectsV2 parsing, `.md` filtering, optional pagination
//! - **Keys**: filenames resolved under the prefix, traversal rejected
//!
//! ## Example
//!
//! ```rust,ignore
//! use notes_store::{NoteStore, StoreSettings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = StoreSettings::new()
//!         .with_credentials("https://gateway.storjshare.io", "notes", "access", "secret")
//!         .with_prefix("obsidian")
//!         .validate()?;
//!
//!     let store = NoteStore::new(config)?;
//!     for file in store.list_notes().await?.files {
//!         println!("{}", file);
//!     }
//!
//!     store.write_note("hello.md", "# Hello".to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
mod client;
mod config;
mod error;
pub mod key;
pub mod listing;
mod types;

pub use client::{NoteStore, MARKDOWN_CONTENT_TYPE};
pub use config::{Setting, StoreConfig, StoreSettings, DEFAULT_REGION};
pub use error::{Result, StoreError, StoreOperation};
pub use key::NoteKey;
pub use types::*;
