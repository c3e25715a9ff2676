//! Recursive traversal and aggregation.
//!
//! A visit classifies its path once, then either counts a file, folds a
//! directory's children, or silently skips an entry that no longer exists.
//! Per-file reports are emitted through the injected [`Reporter`]; only
//! leaf files produce them, directories contribute to the aggregate alone.

pub mod filter;

use crate::count::count_file;
use crate::domain::{FileStats, Mask, PathKind};
use crate::render::Reporter;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use filter::IgnoreFilter;

/// Count one file or a whole directory tree.
///
/// Missing paths fold in as the zero identity, tolerating entries that
/// vanish between listing and visiting. An ignored directory is pruned
/// without its children ever being listed. Counter errors on an existing,
/// non-ignored file abort the traversal.
pub fn process_path<R: Reporter>(
    path: &Path,
    mask: Mask,
    filter: &IgnoreFilter,
    reporter: &mut R,
) -> Result<FileStats> {
    match PathKind::of(path) {
        PathKind::Missing => {
            debug!(path = %path.display(), "skipping missing path");
            Ok(FileStats::default())
        }
        PathKind::File => {
            if filter.is_ignored(path) {
                debug!(path = %path.display(), "skipping ignored file");
                return Ok(FileStats::default());
            }
            let stats = count_file(path)?;
            reporter.report(&stats, mask, &path.display().to_string())?;
            Ok(stats)
        }
        PathKind::Directory => {
            if filter.is_ignored(path) {
                debug!(path = %path.display(), "pruning ignored directory");
                return Ok(FileStats::default());
            }
            let entries = fs::read_dir(path)
                .with_context(|| format!("Failed to list directory: {}", path.display()))?;
            let mut total = FileStats::default();
            for entry in entries {
                let entry = entry
                    .with_context(|| format!("Failed to read entry in: {}", path.display()))?;
                total = total + process_path(&entry.path(), mask, filter, reporter)?;
            }
            Ok(total)
        }
    }
}

/// Fold every operator-supplied root into one grand total and emit the
/// final aggregate report under the name `total`.
pub fn process_roots<R: Reporter>(
    paths: &[PathBuf],
    mask: Mask,
    filter: &IgnoreFilter,
    reporter: &mut R,
) -> Result<FileStats> {
    let mut total = FileStats::default();
    for path in paths {
        total = total + process_path(path, mask, filter, reporter)?;
    }
    reporter.report(&total, mask, "total")?;
    Ok(total)
}
