//! SPRT sprite descriptor parser for GameMaker Studio asset dumps.
//!
//! A descriptor file describes one sprite. The part consumed here is the
//! frame list: an ordered sequence of offset keys, one per frame in display
//! order, each to be looked up in the TPAG paging table.
//!
//! # File Format
//!
//! SPRT files are little-endian. At byte 52 (13 x 4, past the header fields
//! this tool does not consume):
//! - 4 bytes: Frame count `n`
//! - 4 bytes x n: Frame offset keys, in display order
//!
//! # Example
//!
//! ```no_run
//! use stribog_sprt::SpriteDescriptor;
//!
//! let descriptor = SpriteDescriptor::from_file("SPRT/sprPlayer.dat")?;
//! for key in descriptor.frame_keys() {
//!     println!("frame at table key {key}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod descriptor;
mod error;

pub use descriptor::SpriteDescriptor;
pub use error::{Error, Result};

/// Byte offset of the frame count field.
pub const FRAME_COUNT_OFFSET: usize = 13 * 4;

/// Byte offset of the first frame key.
pub const FRAME_KEYS_OFFSET: usize = 14 * 4;
