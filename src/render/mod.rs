//! Report emission.
//!
//! The traversal is decoupled from output through the [`Reporter`] trait;
//! the production sink writes wc-style lines to any `Write` target.

use crate::domain::{FileStats, Mask};
use anyhow::Result;
use std::io::Write;
use thiserror::Error;

/// Rejected report configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The mask selects none of the four counters.
    #[error("report mask selects no fields")]
    EmptyMask,
}

/// Sink for the per-file and total reports emitted during a run.
pub trait Reporter {
    fn report(&mut self, stats: &FileStats, mask: Mask, name: &str) -> Result<()>;
}

/// Writes report lines to a `Write` target, one line per report.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, stats: &FileStats, mask: Mask, name: &str) -> Result<()> {
        let line = format_report(stats, mask, name)?;
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Render one report line: two leading spaces, then each selected count
/// followed by a tab in fixed line/word/character/byte order, then the name.
///
/// The whole line is built before anything is written, so an empty mask can
/// never leave partial output behind.
pub fn format_report(stats: &FileStats, mask: Mask, name: &str) -> Result<String, RenderError> {
    if mask.is_empty() {
        return Err(RenderError::EmptyMask);
    }

    let mut line = String::from("  ");
    if mask.line_count {
        line.push_str(&stats.line_count.to_string());
        line.push('\t');
    }
    if mask.word_count {
        line.push_str(&stats.word_count.to_string());
        line.push('\t');
    }
    if mask.character_count {
        line.push_str(&stats.character_count.to_string());
        line.push('\t');
    }
    if mask.byte_count {
        line.push_str(&stats.byte_count.to_string());
        line.push('\t');
    }
    line.push_str(name);
    line.push('\n');
    Ok(line)
}
