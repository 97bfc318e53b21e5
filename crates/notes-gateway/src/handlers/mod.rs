//! Route handlers

pub mod notes;
pub mod service;

pub use notes::*;
pub use service::*;
