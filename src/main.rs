//! Stribog CLI - Bulk sprite-frame extraction for GameMaker Studio asset dumps.
//!
//! Feed it the SPRT, TPAG and TXTR folders dumped from a `data.win` (this
//! tool does not unpack `data.win` itself) and it writes every valid frame
//! of every sprite as its own PNG.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

use stribog::prelude::*;
use stribog::sprt::FRAME_KEYS_OFFSET;

/// Stribog - sprite-sheet splitting tool for GameMaker Studio dumps
#[derive(Parser)]
#[command(name = "stribog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder holding SPRT, TPAG and TXTR subfolders (replaces the three individual options)
    #[arg(long, conflicts_with_all = ["sprt", "tpag", "txtr"])]
    data: Option<PathBuf>,

    /// Folder with sprite descriptor files
    #[arg(long, required_unless_present = "data")]
    sprt: Option<PathBuf>,

    /// Folder with the paging table
    #[arg(long, required_unless_present = "data")]
    tpag: Option<PathBuf>,

    /// Folder with sheet images
    #[arg(long, required_unless_present = "data")]
    txtr: Option<PathBuf>,

    /// Folder where split frames are saved
    #[arg(short, long, env = "OUTPUT_FOLDER")]
    target: PathBuf,

    /// Print per-frame information and skip reasons
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (sprt_dir, tpag_dir, txtr_dir) = if let Some(data) = &cli.data {
        (data.join("SPRT"), data.join("TPAG"), data.join("TXTR"))
    } else {
        // clap enforces presence when --data is absent
        (
            cli.sprt.clone().context("--sprt folder is required")?,
            cli.tpag.clone().context("--tpag folder is required")?,
            cli.txtr.clone().context("--txtr folder is required")?,
        )
    };

    let table_path = find_paging_table(&tpag_dir)
        .with_context(|| format!("failed to scan {}", tpag_dir.display()))?
        .context("no paging table (.dat) found in the TPAG folder")?;

    let start = Instant::now();
    let table = PagingTable::from_file(&table_path)
        .with_context(|| format!("failed to load paging table {}", table_path.display()))?;

    println!(
        "Paging table: {} entries, keys {}..={}",
        table.entry_count(),
        table.lowest_key(),
        table.highest_key()
    );

    let sheets = SheetSet::load_dir(&txtr_dir)
        .with_context(|| format!("failed to read sheet folder {}", txtr_dir.display()))?;
    let unreadable = sheets.iter().filter(|s| s.is_empty()).count();
    println!("Loaded {} sheets ({} unreadable)", sheets.len(), unreadable);

    fs::create_dir_all(&cli.target)
        .with_context(|| format!("failed to create target folder {}", cli.target.display()))?;

    let descriptors = collect_descriptors(&sprt_dir)
        .with_context(|| format!("failed to read descriptor folder {}", sprt_dir.display()))?;

    println!("Splitting {} sprites...", descriptors.len());

    let pb = if cli.verbose {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(descriptors.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("#>-"),
        );
        pb
    };

    let mut written = 0;
    let mut skipped = 0;
    let mut unreadable_files = 0;

    for path in &descriptors {
        match split_sprite(&table, &sheets, path, &cli.target) {
            Ok(report) => {
                report_outcomes(path, &report, cli.verbose);
                written += report.written();
                skipped += report.skipped();
            }
            Err(e) => {
                eprintln!("Error splitting {}: {}", path.display(), e);
                unreadable_files += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!(
        "Wrote {} frames from {} sprites in {:?} ({} frames skipped, {} descriptors unreadable)",
        written,
        descriptors.len() - unreadable_files,
        start.elapsed(),
        skipped,
        unreadable_files
    );

    Ok(())
}

/// Find the paging table file in the TPAG folder.
///
/// Regular files named `*.dat` qualify; the last one in enumeration order
/// wins. The table's format is checked when it is loaded, not here.
fn find_paging_table(dir: &Path) -> Result<Option<PathBuf>> {
    let pattern = Regex::new(r"^.*\.dat$")?;
    let mut table = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if pattern.is_match(name) {
            table = Some(entry.path());
        }
    }

    Ok(table)
}

/// Collect descriptor candidates: regular files large enough to hold the
/// fixed header plus at least one frame key.
fn collect_descriptors(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.metadata()?.len() > FRAME_KEYS_OFFSET as u64 {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Print per-frame diagnostics.
///
/// Skips and successes surface only in verbose mode; a frame that resolved
/// but could not be saved is always reported.
fn report_outcomes(path: &Path, report: &SplitReport, verbose: bool) {
    if verbose {
        println!("\nFile: {}", path.display());
        println!("Number of frames: {}", report.frame_count);
    }

    for outcome in &report.outcomes {
        match outcome {
            FrameOutcome::Written { resolution, path } if verbose => {
                let a = &resolution.attributes;
                println!(
                    "  Frame {}: [x:{}, y:{}, w:{}, h:{}, bbX:{}, bbY:{}, bbW:{}, bbH:{}, sheet:{}]",
                    resolution.frame_ordinal,
                    a.origin_x,
                    a.origin_y,
                    a.width,
                    a.height,
                    a.bound_x,
                    a.bound_y,
                    a.bound_w,
                    a.bound_h,
                    a.sheet_index
                );
                println!("  Output: {}", path.display());
            }
            FrameOutcome::Skipped {
                frame_ordinal,
                reason,
            } if verbose => {
                eprintln!("  Skipping frame {} ({})", frame_ordinal, reason);
            }
            FrameOutcome::ExportFailed {
                frame_ordinal,
                path,
                error,
            } => {
                eprintln!(
                    "  Couldn't save frame {} to {}: {}",
                    frame_ordinal,
                    path.display(),
                    error
                );
            }
            _ => {}
        }
    }
}
