//! Error types for TPAG parsing.

use thiserror::Error;

/// Errors that can occur when working with TPAG paging tables.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] stribog_common::Error),

    /// Table buffer too small for its declared entry count.
    #[error("truncated paging table: need {needed} bytes, file has {actual}")]
    TruncatedTable { needed: u64, actual: usize },
}

/// Result type for TPAG operations.
pub type Result<T> = std::result::Result<T, Error>;
