//! tree-tally: Streaming line, word, character, and byte counts
//!
//! This tool counts lines, words, characters, and bytes for individual files
//! and recursively over directory trees, reading every file in bounded-size
//! chunks so that arbitrarily large inputs never have to fit in memory.

pub mod cli;
pub mod config;
pub mod count;
pub mod domain;
pub mod render;
pub mod scan;
