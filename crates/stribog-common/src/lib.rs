//! Common utilities for Stribog.
//!
//! This crate provides the foundational types used across all Stribog crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices,
//!   with absolute-offset accessors for offset-keyed formats
//! - Shared [`Error`]/[`Result`] types

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
