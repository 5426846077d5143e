//! # gitsnap Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled binary inside its own temporary working directory, optionally
//! with a stub `git` script first on `PATH`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Output file name, relative to the working directory.
pub const OUTPUT_FILE: &str = "git_status.txt";

/// Returns an `assert_cmd::Command` for the compiled `gitsnap` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn gitsnap_cmd() -> Command {
    Command::cargo_bin("gitsnap").expect("Failed to find gitsnap binary for testing")
}

/// Writes an executable `git` shell script into `bin_dir` with `body` as its contents.
#[cfg(unix)]
pub fn write_stub_git(bin_dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = bin_dir.join("git");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write stub git");
    let mut perms = std::fs::metadata(&path).expect("stat stub git").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub git");
    path
}

/// `PATH` with `bin_dir` prepended, so a stub `git` shadows the real one
/// while `sleep`, `printf`, etc. stay reachable.
pub fn path_with(bin_dir: &Path) -> std::ffi::OsString {
    let mut dirs = vec![bin_dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        dirs.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(dirs).expect("join PATH")
}

/// Reads the output file from `dir`.
pub fn read_output(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(OUTPUT_FILE)).expect("git_status.txt should exist")
}
