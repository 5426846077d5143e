//! # gitsnap Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers. Currently only `io`, which writes the report file.
//! Import from the submodule directly (`crate::common::fs::io::write_string_to_file`).
//!

/// Directory creation and whole-file writes.
pub mod io;
