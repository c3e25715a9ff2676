//! Core data model shared by the counter, the traversal, and the reporters.

use std::iter::Sum;
use std::ops::Add;
use std::path::Path;

/// Counts gathered from one file, or folded together from many.
///
/// Combining is field-wise addition with `FileStats::default()` as the
/// identity. The combine is associative and commutative, so a directory
/// fold produces the same aggregate regardless of visit order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub line_count: u64,
    pub word_count: u64,
    pub character_count: u64,
    pub byte_count: u64,
}

impl Add for FileStats {
    type Output = FileStats;

    fn add(self, other: FileStats) -> FileStats {
        FileStats {
            line_count: self.line_count + other.line_count,
            word_count: self.word_count + other.word_count,
            character_count: self.character_count + other.character_count,
            byte_count: self.byte_count + other.byte_count,
        }
    }
}

impl Sum for FileStats {
    fn sum<I: Iterator<Item = FileStats>>(iter: I) -> FileStats {
        iter.fold(FileStats::default(), Add::add)
    }
}

/// Selects which `FileStats` fields a report line includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mask {
    pub line_count: bool,
    pub word_count: bool,
    pub character_count: bool,
    pub byte_count: bool,
}

impl Mask {
    /// Derive the report mask from the raw CLI count flags.
    ///
    /// When no flag is given, lines, words, and characters are reported and
    /// bytes are not.
    pub fn from_flags(lines: bool, words: bool, characters: bool, bytes: bool) -> Mask {
        if !(lines || words || characters || bytes) {
            return Mask {
                line_count: true,
                word_count: true,
                character_count: true,
                byte_count: false,
            };
        }
        Mask { line_count: lines, word_count: words, character_count: characters, byte_count: bytes }
    }

    /// True when no field is selected. Such a mask is a configuration error
    /// and is rejected before any output is written.
    pub fn is_empty(&self) -> bool {
        !(self.line_count || self.word_count || self.character_count || self.byte_count)
    }
}

/// What a visited path turned out to be, resolved once per visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Missing,
}

impl PathKind {
    /// Classify `path`, following symlinks.
    ///
    /// Anything that is neither a regular file nor a directory (vanished
    /// entries, broken symlinks, sockets, unreadable metadata) is `Missing`
    /// and contributes the zero identity to a fold.
    pub fn of(path: &Path) -> PathKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => PathKind::File,
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            _ => PathKind::Missing,
        }
    }
}
