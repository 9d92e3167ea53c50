//! Custom error types for the prj-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only file-open/read failures surface as errors; parsing-level
/// ambiguity is absorbed into best-effort values and truncated or
/// malformed files yield partial mappings instead of failing.
#[derive(Debug, Error)]
pub enum PrjError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `PrjError` type.
pub type Result<T> = std::result::Result<T, PrjError>;
