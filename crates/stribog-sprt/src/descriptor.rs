//! Sprite descriptor loading.

use std::fs;
use std::path::Path;

use stribog_common::BinaryReader;

use crate::{Error, Result, FRAME_COUNT_OFFSET, FRAME_KEYS_OFFSET};

/// A parsed sprite descriptor.
///
/// Holds the ordered frame key list and nothing else; whether a key
/// resolves to a usable table entry is decided later, per frame, against
/// the paging table and the loaded sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteDescriptor {
    frame_keys: Vec<u32>,
}

impl SpriteDescriptor {
    /// Read and parse a descriptor file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    /// Parse a descriptor from its raw bytes.
    ///
    /// Fails with [`Error::TruncatedDescriptor`] when the buffer cannot
    /// contain the declared field positions. The declared count is checked
    /// against the buffer before anything is allocated, so an adversarial
    /// count cannot trigger an oversized allocation.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new_at(data, FRAME_COUNT_OFFSET);

        let frame_count = reader.read_u32().map_err(|_| Error::TruncatedDescriptor {
            needed: FRAME_KEYS_OFFSET as u64,
            actual: data.len(),
        })?;

        let needed = FRAME_KEYS_OFFSET as u64 + frame_count as u64 * 4;
        if needed > data.len() as u64 {
            return Err(Error::TruncatedDescriptor {
                needed,
                actual: data.len(),
            });
        }

        let mut frame_keys = Vec::with_capacity(frame_count as usize);
        for _ in 0..frame_count {
            frame_keys.push(reader.read_u32()?);
        }

        Ok(Self { frame_keys })
    }

    /// Number of frames the descriptor declares.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_keys.len() as u32
    }

    /// The frame offset keys, in display order.
    #[inline]
    pub fn frame_keys(&self) -> &[u32] {
        &self.frame_keys
    }
}
