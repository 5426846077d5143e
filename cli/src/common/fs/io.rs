//! # gitsnap Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Persists the report. **`write_string_to_file`** wraps `std::fs::write`:
//! the file is created or truncated, never appended to, and a failure carries
//! `anyhow::Context` naming the path.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes `content` to `path`, replacing whatever the file held before.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be created or written (missing parent
/// directory, permissions, a directory in the way, ...).
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_overwrites_instead_of_appending() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("git_status.txt");
        write_string_to_file(&file_path, "first run, longer content")?;
        write_string_to_file(&file_path, "second")?;
        assert_eq!(fs::read_to_string(&file_path)?, "second");
        Ok(())
    }

    #[test]
    fn test_write_into_directory_fails_with_context() -> Result<()> {
        let base_dir = tempdir()?;
        let err = write_string_to_file(base_dir.path(), "content").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
        Ok(())
    }

    #[test]
    fn test_write_into_missing_directory_fails() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("missing/git_status.txt");
        assert!(write_string_to_file(&file_path, "\nError:\n").is_err());
        assert!(!file_path.exists());
        Ok(())
    }
}
