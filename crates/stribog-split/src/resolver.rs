//! Per-frame key resolution.

use thiserror::Error;

use stribog_tpag::{FrameAttributes, PagingTable};

use crate::sheet::SheetSet;

/// Why a single frame was abandoned.
///
/// Each check in [`resolve`] maps to one variant, so a batch can account
/// for every frame it did not write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The key falls outside the table's key range.
    #[error("offset key outside the table's key range")]
    KeyOutOfRange,

    /// The key does not land on a record boundary.
    #[error("offset key does not fall on a record boundary")]
    Misaligned,

    /// The record bytes fall outside the table buffer.
    #[error("attribute record lies outside the table buffer")]
    TruncatedRecord,

    /// The record's sheet index matches no loaded sheet.
    #[error("sheet index matches no loaded sheet")]
    UnknownSheet,

    /// The sheet is empty or the crop rectangle exceeds its bounds.
    #[error("crop rectangle exceeds sheet bounds")]
    InvalidGeometry,
}

/// A crop rectangle on a sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A fully validated frame, ready for cropping and export.
///
/// Value object: constructed by [`resolve`], consumed once by the export
/// step, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResolution {
    /// Index of the sheet to crop from.
    pub sheet_index: usize,
    /// The validated crop rectangle.
    pub rect: CropRect,
    /// 1-based position of the frame in its descriptor.
    pub frame_ordinal: u32,
    /// The raw attribute record, for diagnostics.
    pub attributes: FrameAttributes,
}

/// Resolve one frame key against the table and the loaded sheets.
///
/// Checks run in a fixed order and the first failure wins: range,
/// alignment, record bounds, sheet index, geometry. A failure skips this
/// frame only; callers continue with the next key.
pub fn resolve(
    table: &PagingTable,
    sheets: &SheetSet,
    key: u32,
    frame_ordinal: u32,
) -> Result<FrameResolution, SkipReason> {
    if !table.contains_key(key) {
        return Err(SkipReason::KeyOutOfRange);
    }

    if !table.is_aligned(key) {
        return Err(SkipReason::Misaligned);
    }

    let attributes = table.attributes_at(key).ok_or(SkipReason::TruncatedRecord)?;

    let sheet_index = attributes.sheet_index as usize;
    let sheet = sheets.get(sheet_index).ok_or(SkipReason::UnknownSheet)?;

    if sheet.is_empty() || !attributes.lies_within(sheet.width(), sheet.height()) {
        return Err(SkipReason::InvalidGeometry);
    }

    Ok(FrameResolution {
        sheet_index,
        rect: CropRect {
            x: attributes.origin_x as u32,
            y: attributes.origin_y as u32,
            width: attributes.width as u32,
            height: attributes.height as u32,
        },
        frame_ordinal,
        attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::DynamicImage;

    use crate::sheet::Sheet;

    fn build_table(lowest: u32, records: &[[u16; 11]]) -> PagingTable {
        let mut bytes = (records.len() as u32).to_le_bytes().to_vec();
        for i in 0..records.len() as u32 {
            bytes.extend_from_slice(&(lowest + i * FrameAttributes::SIZE as u32).to_le_bytes());
        }
        for record in records {
            for field in record {
                bytes.extend_from_slice(&field.to_le_bytes());
            }
        }
        PagingTable::parse(bytes).unwrap()
    }

    fn one_sheet(width: u32, height: u32) -> SheetSet {
        let mut sheets = SheetSet::default();
        sheets.push(Sheet::new(DynamicImage::new_rgba8(width, height)));
        sheets
    }

    fn record(x: u16, y: u16, w: u16, h: u16, sheet: u16) -> [u16; 11] {
        [x, y, w, h, 0, 0, w, h, 0, 0, sheet]
    }

    #[test]
    fn test_resolve_valid_frame() {
        let table = build_table(100, &[record(5, 5, 10, 10, 0)]);
        let sheets = one_sheet(20, 20);

        let resolution = resolve(&table, &sheets, 100, 1).unwrap();
        assert_eq!(resolution.sheet_index, 0);
        assert_eq!(
            resolution.rect,
            CropRect {
                x: 5,
                y: 5,
                width: 10,
                height: 10
            }
        );
        assert_eq!(resolution.frame_ordinal, 1);
        assert_eq!(resolution.attributes.bound_w, 10);
    }

    #[test]
    fn test_resolve_full_sheet_frame() {
        // A frame at the origin covering the whole sheet is the largest
        // rectangle the geometry check accepts. With the origin at (0, 0)
        // the sentinel reads as 0, so only key 0 is in range.
        let table = build_table(0, &[record(0, 0, 20, 20, 0)]);
        let sheets = one_sheet(20, 20);

        let resolution = resolve(&table, &sheets, 0, 1).unwrap();
        assert_eq!(
            resolution.rect,
            CropRect {
                x: 0,
                y: 0,
                width: 20,
                height: 20
            }
        );
    }

    #[test]
    fn test_key_out_of_range() {
        let table = build_table(100, &[record(5, 5, 10, 10, 0)]);
        let sheets = one_sheet(20, 20);

        assert_eq!(
            resolve(&table, &sheets, 99, 1),
            Err(SkipReason::KeyOutOfRange)
        );
        assert_eq!(
            resolve(&table, &sheets, table.highest_key() + 1, 1),
            Err(SkipReason::KeyOutOfRange)
        );
        assert_eq!(resolve(&table, &sheets, 0, 1), Err(SkipReason::KeyOutOfRange));
        assert_eq!(
            resolve(&table, &sheets, u32::MAX, 1),
            Err(SkipReason::KeyOutOfRange)
        );
    }

    #[test]
    fn test_key_misaligned() {
        let table = build_table(100, &[record(5, 5, 10, 10, 0)]);
        let sheets = one_sheet(20, 20);

        assert_eq!(resolve(&table, &sheets, 101, 1), Err(SkipReason::Misaligned));
        assert_eq!(resolve(&table, &sheets, 121, 1), Err(SkipReason::Misaligned));
    }

    #[test]
    fn test_record_out_of_buffer() {
        // Key 122 is in range (the sentinel reads far past it) and aligned,
        // but the table stores only one record.
        let table = build_table(100, &[record(5, 5, 10, 10, 0)]);
        let sheets = one_sheet(20, 20);

        assert_eq!(
            resolve(&table, &sheets, 122, 1),
            Err(SkipReason::TruncatedRecord)
        );
    }

    #[test]
    fn test_unknown_sheet() {
        let table = build_table(100, &[record(5, 5, 10, 10, 5)]);
        let sheets = one_sheet(20, 20);

        assert_eq!(
            resolve(&table, &sheets, 100, 1),
            Err(SkipReason::UnknownSheet)
        );

        // An empty sheet set never gets dereferenced either
        assert_eq!(
            resolve(&table, &SheetSet::default(), 100, 1),
            Err(SkipReason::UnknownSheet)
        );
    }

    #[test]
    fn test_invalid_geometry() {
        let sheets = one_sheet(20, 20);

        // Rectangle spills past the right edge
        let table = build_table(100, &[record(15, 5, 6, 10, 0)]);
        assert_eq!(
            resolve(&table, &sheets, 100, 1),
            Err(SkipReason::InvalidGeometry)
        );

        // Origin outside the sheet
        let table = build_table(100, &[record(20, 1, 1, 1, 0)]);
        assert_eq!(
            resolve(&table, &sheets, 100, 1),
            Err(SkipReason::InvalidGeometry)
        );
    }

    #[test]
    fn test_undecoded_sheet_skips_via_geometry() {
        let table = build_table(0, &[record(0, 0, 1, 1, 0)]);
        let mut sheets = SheetSet::default();
        sheets.push(Sheet::empty());

        assert_eq!(
            resolve(&table, &sheets, 0, 1),
            Err(SkipReason::InvalidGeometry)
        );
    }
}
