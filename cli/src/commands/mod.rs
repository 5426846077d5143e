//! # gitsnap Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! gitsnap has a single command and no subcommands: `capture` runs the status
//! query and writes the report file. `main.rs` calls
//! `commands::capture::capture_status` directly.
//!

/// Runs `git status` and writes `git_status.txt`.
pub mod capture;
