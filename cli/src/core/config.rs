//! # gitsnap Capture Settings
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! gitsnap has no external configuration surface: no config file, no
//! environment variables, no flags that change what is captured. The fixed
//! values live here as constants, gathered into `CaptureSettings` so the
//! capture logic takes one typed value instead of reaching for globals.
//!
//! The binary always uses `CaptureSettings::default()`. Tests build other
//! settings (a stub program, a short timeout, a temp output path) to reach the
//! edge cases without depending on the host's `git`.
//!
use std::path::PathBuf;
use std::time::Duration;

/// The status query program.
pub const DEFAULT_PROGRAM: &str = "git";
/// Arguments passed to `DEFAULT_PROGRAM`.
pub const DEFAULT_ARGS: [&str; 1] = ["status"];
/// Upper bound on spawning and waiting for the child.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Output file, relative to the working directory of the caller.
pub const DEFAULT_OUTPUT_PATH: &str = "git_status.txt";

/// Everything `capture_with` needs to run one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSettings {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_git_status() {
        let settings = CaptureSettings::default();
        assert_eq!(settings.program, "git");
        assert_eq!(settings.args, vec!["status".to_string()]);
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.output_path, PathBuf::from("git_status.txt"));
        assert!(settings.output_path.is_relative());
    }
}
