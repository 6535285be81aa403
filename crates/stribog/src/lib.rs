//! Stribog - GameMaker Studio sprite-sheet frame extraction library.
//!
//! This crate provides a unified interface to the Stribog library ecosystem
//! for splitting packed sprite sheets back into individual frames.
//!
//! # Crates
//!
//! - [`stribog_common`] - Common utilities (bounds-checked binary reading)
//! - [`stribog_tpag`] - TPAG paging table parsing
//! - [`stribog_sprt`] - SPRT sprite descriptor parsing
//! - [`stribog_split`] - Frame resolution and sprite splitting
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stribog::prelude::*;
//!
//! // Load the shared inputs once
//! let table = PagingTable::from_file("TPAG/00000000.dat")?;
//! let sheets = SheetSet::load_dir("TXTR")?;
//!
//! // Split one sprite
//! let report = split_sprite(&table, &sheets, Path::new("SPRT/sprPlayer.dat"), Path::new("out"))?;
//! println!("{} frames written", report.written());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use stribog_common as common;
pub use stribog_split as split;
pub use stribog_sprt as sprt;
pub use stribog_tpag as tpag;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use stribog_common::BinaryReader;
    pub use stribog_split::{
        resolve, split_sprite, CropRect, FrameOutcome, FrameResolution, Sheet, SheetSet,
        SkipReason, SplitReport,
    };
    pub use stribog_sprt::SpriteDescriptor;
    pub use stribog_tpag::{FrameAttributes, PagingTable};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
