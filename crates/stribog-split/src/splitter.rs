//! Per-descriptor sprite splitting.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};

use stribog_sprt::SpriteDescriptor;
use stribog_tpag::PagingTable;

use crate::resolver::{resolve, FrameResolution, SkipReason};
use crate::sheet::SheetSet;
use crate::Result;

/// What happened to one frame of a descriptor.
#[derive(Debug)]
pub enum FrameOutcome {
    /// The frame was cropped and saved.
    Written {
        resolution: FrameResolution,
        path: PathBuf,
    },
    /// Resolution failed; nothing was written.
    Skipped {
        frame_ordinal: u32,
        reason: SkipReason,
    },
    /// The frame resolved but the encoder or filesystem rejected it.
    ExportFailed {
        frame_ordinal: u32,
        path: PathBuf,
        error: image::ImageError,
    },
}

/// The result of splitting one descriptor file.
#[derive(Debug)]
pub struct SplitReport {
    /// Descriptor file stem; names the output directory and files.
    pub stem: String,
    /// Frame count the descriptor declared.
    pub frame_count: u32,
    /// Per-frame outcomes, in descriptor order.
    pub outcomes: Vec<FrameOutcome>,
}

impl SplitReport {
    /// Number of frames written to disk.
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FrameOutcome::Written { .. }))
            .count()
    }

    /// Number of frames not written, for any reason.
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Split every frame of one descriptor file into `target`.
///
/// Frames are processed strictly in descriptor order; each gets exactly one
/// [`FrameOutcome`] and a failure never stops the frames after it. Output
/// lands at `target/<stem>/<stem><ordinal>.png`, the per-sprite directory
/// created once the first frame is written.
///
/// Fails only when the descriptor file itself cannot be read or parsed, or
/// the per-sprite directory cannot be created.
pub fn split_sprite(
    table: &PagingTable,
    sheets: &SheetSet,
    descriptor_path: &Path,
    target: &Path,
) -> Result<SplitReport> {
    let descriptor = SpriteDescriptor::from_file(descriptor_path)?;

    let stem = descriptor_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("sprite"));
    let sprite_dir = target.join(&stem);

    let mut outcomes = Vec::with_capacity(descriptor.frame_count() as usize);

    for (i, &key) in descriptor.frame_keys().iter().enumerate() {
        let frame_ordinal = i as u32 + 1;

        let resolution = match resolve(table, sheets, key, frame_ordinal) {
            Ok(resolution) => resolution,
            Err(reason) => {
                outcomes.push(FrameOutcome::Skipped {
                    frame_ordinal,
                    reason,
                });
                continue;
            }
        };

        let Some(frame) = crop_frame(sheets, &resolution) else {
            outcomes.push(FrameOutcome::Skipped {
                frame_ordinal,
                reason: SkipReason::InvalidGeometry,
            });
            continue;
        };

        fs::create_dir_all(&sprite_dir)?;
        let path = sprite_dir.join(format!("{stem}{frame_ordinal}.png"));

        match frame.save(&path) {
            Ok(()) => outcomes.push(FrameOutcome::Written { resolution, path }),
            Err(error) => outcomes.push(FrameOutcome::ExportFailed {
                frame_ordinal,
                path,
                error,
            }),
        }
    }

    Ok(SplitReport {
        stem,
        frame_count: descriptor.frame_count(),
        outcomes,
    })
}

/// Crop a resolved frame out of its sheet.
///
/// Returns `None` when the sheet slot or rectangle is invalid; resolution
/// already rules that out, but the crop refuses to clamp silently.
fn crop_frame(sheets: &SheetSet, resolution: &FrameResolution) -> Option<DynamicImage> {
    let image = sheets.get(resolution.sheet_index)?.image()?;
    let rect = resolution.rect;

    if rect.x + rect.width > image.width() || rect.y + rect.height > image.height() {
        return None;
    }

    Some(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
}
