//! Paging table loading and key lookup.

use std::fs;
use std::path::Path;

use stribog_common::BinaryReader;

use crate::record::FrameAttributes;
use crate::{Error, Result};

/// A loaded TPAG paging table.
///
/// The table owns its byte buffer and is read-only after parsing; all
/// descriptor resolutions for a run share one instance. Only the size
/// invariant is checked at load time. Individual records are validated per
/// lookup, so a malformed key skips one frame instead of rejecting the
/// whole table.
#[derive(Debug, Clone)]
pub struct PagingTable {
    data: Vec<u8>,
    entry_count: u32,
    lowest_key: u32,
    highest_key: u32,
    attribute_region_start: usize,
}

impl PagingTable {
    /// Read and parse a paging table from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::parse(data)
    }

    /// Parse a paging table from its raw bytes.
    ///
    /// Fails with [`Error::TruncatedTable`] when the buffer cannot hold the
    /// declared entry count's offset index and attribute records.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        let reader = BinaryReader::new(&data);

        let entry_count = reader.u32_at(0).map_err(|_| Error::TruncatedTable {
            needed: 4,
            actual: data.len(),
        })?;

        let region_start = 4 * (entry_count as u64 + 1);
        let needed = entry_count as u64 * FrameAttributes::SIZE as u64 + region_start;
        // The offset index must be readable even for an empty table, where
        // the record region contributes nothing to `needed`.
        let needed = needed.max(region_start + 4).max(8);

        if needed > data.len() as u64 {
            return Err(Error::TruncatedTable {
                needed,
                actual: data.len(),
            });
        }

        let lowest_key = reader.u32_at(4)?;
        let highest_key = reader.u32_at(region_start as usize)?;

        Ok(Self {
            data,
            entry_count,
            lowest_key,
            highest_key,
            attribute_region_start: region_start as usize,
        })
    }

    /// Number of offset-keyed entries declared by the table.
    #[inline]
    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }

    /// Lowest usable offset key.
    #[inline]
    pub fn lowest_key(&self) -> u32 {
        self.lowest_key
    }

    /// Highest usable offset key (the sentinel high-water mark).
    #[inline]
    pub fn highest_key(&self) -> u32 {
        self.highest_key
    }

    /// Byte offset where the attribute records begin.
    #[inline]
    pub fn attribute_region_start(&self) -> usize {
        self.attribute_region_start
    }

    /// Check whether a key falls inside the table's key range.
    #[inline]
    pub fn contains_key(&self, key: u32) -> bool {
        key >= self.lowest_key && key <= self.highest_key
    }

    /// Check whether a key lands on a record boundary.
    ///
    /// Keys between boundaries would dereference the middle of a record.
    #[inline]
    pub fn is_aligned(&self, key: u32) -> bool {
        key.checked_sub(self.lowest_key)
            .is_some_and(|rel| rel % FrameAttributes::SIZE as u32 == 0)
    }

    /// Fetch the attribute record a key points at.
    ///
    /// Returns `None` when the key precedes the table's range or the record
    /// bytes fall outside the buffer. Keys are sparse, so the load-time size
    /// invariant does not cover every in-range key.
    pub fn attributes_at(&self, key: u32) -> Option<FrameAttributes> {
        let rel = key.checked_sub(self.lowest_key)? as usize;
        let start = self.attribute_region_start.checked_add(rel)?;

        let reader = BinaryReader::new(&self.data);
        reader.struct_at::<FrameAttributes>(start).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a table with records keyed `lowest`, `lowest + 22`, ...
    /// sized exactly to the format's invariant.
    fn build_table(lowest: u32, records: &[[u16; 11]]) -> Vec<u8> {
        let mut out = (records.len() as u32).to_le_bytes().to_vec();
        for i in 0..records.len() as u32 {
            out.extend_from_slice(&(lowest + i * FrameAttributes::SIZE as u32).to_le_bytes());
        }
        for record in records {
            for field in record {
                out.extend_from_slice(&field.to_le_bytes());
            }
        }
        out
    }

    const RECORD: [u16; 11] = [5, 5, 10, 10, 0, 0, 10, 10, 0, 0, 0];

    #[test]
    fn test_parse_single_entry() {
        let table = PagingTable::parse(build_table(100, &[RECORD])).unwrap();

        assert_eq!(table.entry_count(), 1);
        assert_eq!(table.lowest_key(), 100);
        assert_eq!(table.attribute_region_start(), 8);
        // The sentinel shares storage with the first record's leading fields.
        assert_eq!(table.highest_key(), 5 | 5 << 16);
    }

    #[test]
    fn test_parse_exact_size_boundary() {
        for n in 1..=3usize {
            let bytes = build_table(2200, &vec![RECORD; n]);
            assert_eq!(bytes.len(), n * 22 + 4 * (n + 1));
            assert!(PagingTable::parse(bytes.clone()).is_ok());

            let mut short = bytes;
            short.pop();
            assert!(matches!(
                PagingTable::parse(short),
                Err(Error::TruncatedTable { .. })
            ));
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            PagingTable::parse(Vec::new()),
            Err(Error::TruncatedTable { .. })
        ));
    }

    #[test]
    fn test_parse_zero_entries() {
        // Size invariant alone allows 4 bytes, but the offset index needs
        // a readable first (== sentinel) entry.
        assert!(PagingTable::parse(vec![0; 4]).is_err());

        let mut bytes = 0u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&777u32.to_le_bytes());
        let table = PagingTable::parse(bytes).unwrap();
        assert_eq!(table.lowest_key(), 777);
        assert_eq!(table.highest_key(), 777);
        assert_eq!(table.attributes_at(777), None);
    }

    #[test]
    fn test_attributes_at() {
        let second: [u16; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let table = PagingTable::parse(build_table(100, &[RECORD, second])).unwrap();

        let attrs = table.attributes_at(100).unwrap();
        assert_eq!(attrs.origin_x, 5);
        assert_eq!(attrs.width, 10);

        let attrs = table.attributes_at(122).unwrap();
        assert_eq!(attrs.origin_x, 1);
        assert_eq!(attrs.sheet_index, 11);
    }

    #[test]
    fn test_attributes_at_out_of_buffer() {
        let table = PagingTable::parse(build_table(100, &[RECORD])).unwrap();

        // Below the range
        assert_eq!(table.attributes_at(78), None);
        // Aligned but past the single stored record
        assert_eq!(table.attributes_at(122), None);
        // Far past the buffer
        assert_eq!(table.attributes_at(u32::MAX), None);
    }

    #[test]
    fn test_key_checks() {
        let table = PagingTable::parse(build_table(100, &[RECORD])).unwrap();

        assert!(table.contains_key(100));
        assert!(table.contains_key(table.highest_key()));
        assert!(!table.contains_key(99));
        assert!(!table.contains_key(table.highest_key() + 1));

        assert!(table.is_aligned(100));
        assert!(table.is_aligned(122));
        assert!(!table.is_aligned(101));
        assert!(!table.is_aligned(99));
    }
}
