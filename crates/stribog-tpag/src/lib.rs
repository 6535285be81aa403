//! TPAG paging table parser for GameMaker Studio asset dumps.
//!
//! The paging table maps sparse offset keys to fixed-size texture-page
//! attribute records. Sprite descriptor files reference frames by these
//! keys; looking a key up in the table yields the crop rectangle and the
//! index of the sheet image the frame lives on.
//!
//! # File Format
//!
//! TPAG files are little-endian with the following structure:
//! - 4 bytes: Entry count `n`
//! - 4 bytes x n: Offset keys, ascending; the first is the lowest key
//! - Attribute records, 22 bytes each, starting at byte `4 * (n + 1)`
//!
//! The u32 at byte `4 * (n + 1)` doubles as a sentinel high-water mark:
//! the table treats it as the highest usable key, even though it shares
//! storage with the start of the attribute region. Keys are dense within
//! a record (stride 22) but sparse across the table, so record positions
//! are validated per lookup rather than at load time.
//!
//! # Example
//!
//! ```no_run
//! use stribog_tpag::PagingTable;
//!
//! let table = PagingTable::from_file("TPAG/00000000.dat")?;
//! println!("{} entries, keys {}..={}", table.entry_count(), table.lowest_key(), table.highest_key());
//!
//! if let Some(attrs) = table.attributes_at(table.lowest_key()) {
//!     println!("first frame: {}x{} on sheet {}", attrs.width, attrs.height, attrs.sheet_index);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod record;
mod table;

pub use error::{Error, Result};
pub use record::FrameAttributes;
pub use table::PagingTable;
