//! Frame resolution and sprite splitting.
//!
//! This crate ties the two leaf parsers together: it looks every frame key
//! of a sprite descriptor up in the paging table, validates the resulting
//! attribute record against the loaded sheet images, and crops each valid
//! frame out to its own PNG.
//!
//! A failed check skips that one frame with an enumerated [`SkipReason`];
//! nothing short of an unreadable descriptor file stops the batch.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stribog_split::{split_sprite, SheetSet};
//! use stribog_tpag::PagingTable;
//!
//! let table = PagingTable::from_file("TPAG/00000000.dat")?;
//! let sheets = SheetSet::load_dir("TXTR")?;
//!
//! let report = split_sprite(&table, &sheets, Path::new("SPRT/sprPlayer.dat"), Path::new("out"))?;
//! println!("{} frames written, {} skipped", report.written(), report.skipped());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod resolver;
mod sheet;
mod splitter;

pub use error::{Error, Result};
pub use resolver::{resolve, CropRect, FrameResolution, SkipReason};
pub use sheet::{Sheet, SheetSet};
pub use splitter::{split_sprite, FrameOutcome, SplitReport};
