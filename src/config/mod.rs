//! Configuration loading
//!
//! An optional config file supplies default ignore sets; CLI options are
//! appended on top of whatever the file provides.

pub mod loader;

pub use loader::{load_config, Config};
