//! Streaming file counting.
//!
//! Files are read in fixed-size chunks so memory stays bounded no matter
//! how large the input is. Byte, character, and newline counts accumulate
//! per chunk; word counting must carry state across reads, because a word
//! can straddle a chunk boundary and chunk-local splitting would count its
//! halves as two words.

pub mod decode;

use crate::domain::FileStats;
use anyhow::{Context, Result};
use decode::decode_dropping_invalid;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

/// Fold state threaded through the chunk scan.
#[derive(Debug, Default)]
struct ChunkFold {
    newline_count: u64,
    word_count: u64,
    character_count: u64,
    byte_count: u64,
    /// Trailing run of non-whitespace from the previous chunk. It may still
    /// grow into a longer word, so it is only counted once the next chunk
    /// shows a whitespace boundary or the stream ends.
    pending: String,
}

impl ChunkFold {
    fn push_chunk(&mut self, chunk: &[u8]) {
        self.byte_count += chunk.len() as u64;

        // Decoding is chunk-local: a multi-byte sequence split by the chunk
        // boundary is dropped, like any other invalid sequence.
        let text = decode_dropping_invalid(chunk);
        if text.is_empty() {
            return;
        }

        self.newline_count += text.bytes().filter(|&b| b == b'\n').count() as u64;
        self.character_count += text.chars().count() as u64;

        let mut run = std::mem::take(&mut self.pending);
        run.push_str(&text);

        if run.chars().next_back().is_some_and(char::is_whitespace) {
            // The chunk ends on a boundary: every token is a complete word.
            self.word_count += run.split_whitespace().count() as u64;
        } else {
            // The final token may continue in the next chunk; hold it back.
            let mut tokens = run.split_whitespace();
            let last = tokens.next_back();
            self.word_count += tokens.count() as u64;
            if let Some(last) = last {
                self.pending = last.to_string();
            }
        }
    }

    fn finish(mut self) -> FileStats {
        if !self.pending.is_empty() {
            self.word_count += 1;
        }
        FileStats {
            // One more than the newline count, so an empty file still
            // reports a single line.
            line_count: self.newline_count + 1,
            word_count: self.word_count,
            character_count: self.character_count,
            byte_count: self.byte_count,
        }
    }
}

/// Count one file by streaming it in bounded chunks.
///
/// Open and read failures propagate; no partial stats are ever returned.
pub fn count_file(path: &Path) -> Result<FileStats> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    count_reader(file).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Count stats from any byte stream.
pub fn count_reader<R: Read>(reader: R) -> io::Result<FileStats> {
    count_chunked(reader, CHUNK_SIZE)
}

fn count_chunked<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<FileStats> {
    let mut buf = vec![0u8; chunk_size];
    let mut fold = ChunkFold::default();
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => fold.push_chunk(&buf[..read]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(fold.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn count_str(content: &str) -> FileStats {
        count_reader(Cursor::new(content.as_bytes().to_vec())).expect("count")
    }

    #[test]
    fn test_three_lines_last_unterminated() {
        let stats = count_str("L\nL\nL");
        assert_eq!(stats.line_count, 3);
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.character_count, 5);
        assert_eq!(stats.byte_count, 5);
    }

    #[test]
    fn test_empty_input_reports_one_line() {
        let stats = count_str("");
        assert_eq!(stats.line_count, 1);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.byte_count, 0);
    }

    #[test]
    fn test_trailing_newline_counts_extra_line() {
        assert_eq!(count_str("one two\n").line_count, 2);
        assert_eq!(count_str("one two").line_count, 1);
    }

    #[test]
    fn test_surrounding_whitespace_ignored_for_words() {
        let stats = count_str("  leading and\ttrailing   \n");
        assert_eq!(stats.word_count, 3);
    }

    #[test]
    fn test_unicode_whitespace_separates_words() {
        // U+3000 ideographic space is whitespace for splitting purposes.
        let stats = count_str("alpha\u{3000}beta");
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn test_multibyte_characters_counted_once() {
        let stats = count_str("héllo wörld");
        assert_eq!(stats.character_count, 11);
        assert_eq!(stats.byte_count, 13);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn test_word_count_independent_of_chunk_size() {
        // Words of varying length so boundaries land mid-word for most
        // chunk sizes.
        let content = "foo bar\nbazqux quux corge-grault the quick brown fox \n jumped".repeat(37);
        let expected = count_chunked(Cursor::new(content.as_bytes()), content.len().max(1))
            .expect("whole-input scan");

        for chunk_size in [1, 2, 3, 7, 16, 64, 1024] {
            let stats =
                count_chunked(Cursor::new(content.as_bytes()), chunk_size).expect("chunked scan");
            assert_eq!(
                stats, expected,
                "counts must not depend on chunk size (size {})",
                chunk_size
            );
        }
    }

    #[test]
    fn test_word_straddling_chunk_boundary() {
        // chunk 1 = "fo", chunk 2 = "o bar": naive per-chunk splitting
        // would see three words.
        let stats = count_chunked(Cursor::new(b"foo bar".as_slice()), 2).expect("count");
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn test_invalid_bytes_count_toward_bytes_only() {
        let mut bytes = b"abcde".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0xff]);
        let stats = count_reader(Cursor::new(bytes)).expect("count");
        assert_eq!(stats.byte_count, 8);
        assert_eq!(stats.character_count, 5);
    }

    #[test]
    fn test_multibyte_split_across_chunks_is_dropped() {
        // "aéb" with chunk size 2 puts the two bytes of "é" in different
        // chunks; both halves decode to nothing.
        let stats = count_chunked(Cursor::new("aéb".as_bytes()), 2).expect("count");
        assert_eq!(stats.byte_count, 4);
        assert_eq!(stats.character_count, 2);
    }

    #[test]
    fn test_whitespace_only_input_has_no_words() {
        let stats = count_str(" \t\n  \n");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.line_count, 3);
    }

    #[test]
    fn test_count_file_on_disk() {
        let mut file = NamedTempFile::new().expect("tmp file");
        file.write_all(b"one two three\nfour\n").expect("write");
        file.flush().expect("flush");

        let stats = count_file(file.path()).expect("count");
        assert_eq!(stats.line_count, 3);
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.byte_count, 19);
    }

    #[test]
    fn test_count_file_missing_is_an_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let missing = tmp.path().join("nope.txt");
        assert!(count_file(&missing).is_err());
    }
}
