//! # gitsnap Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities kept separate from the command logic in `commands::`:
//!
//! - **`fs`**: writing the report file (`fs::io::write_string_to_file`).
//! - **`process`**: running a child process with a bounded wait and capturing
//!   its output as text (`process::run_captured`).
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for executing external processes and capturing their output.
pub mod process;
