//! Error types for SPRT parsing.

use thiserror::Error;

/// Errors that can occur when working with SPRT descriptor files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] stribog_common::Error),

    /// Descriptor buffer too small for its declared frame count.
    #[error("truncated sprite descriptor: need {needed} bytes, file has {actual}")]
    TruncatedDescriptor { needed: u64, actual: usize },
}

/// Result type for SPRT operations.
pub type Result<T> = std::result::Result<T, Error>;
