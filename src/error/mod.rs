//! Error handling for people-search.
//!
//! Errors are grouped by the concern that raised them:
//! - Candidate source failures (HTTP, file, payload decoding)
//! - Configuration loading and validation
//! - Terminal and I/O failures of the interactive front end
//!
//! A failed candidate fetch is never fatal for the widget: the loader logs it
//! and falls back to an empty list. The remaining kinds surface in `main`.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, PeopleSearchError, Result, SourceError};
