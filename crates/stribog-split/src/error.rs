//! Error types for sprite splitting.

use thiserror::Error;

/// Errors that can occur when splitting a sprite.
///
/// These abort processing of one descriptor file, never the batch.
/// Per-frame problems are not errors; they surface as
/// [`SkipReason`](crate::SkipReason) values inside the split report.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor parse error.
    #[error("{0}")]
    Sprt(#[from] stribog_sprt::Error),
}

/// Result type for splitting operations.
pub type Result<T> = std::result::Result<T, Error>;
