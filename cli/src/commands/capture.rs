//! # gitsnap Status Capture
//!
//! File: cli/src/commands/capture.rs
//!
//! ## Overview
//!
//! Runs `git status` once and leaves a diagnostic artifact behind no matter
//! what happened. The whole command is one straight line with a single
//! branch:
//!
//! 1. Invoke the status query through `common::process::run_captured` with
//!    the 10 second bound.
//! 2. If it ran to completion (any exit code), the report is the captured
//!    stdout, then a literal `Error:` line, then the captured stderr.
//! 3. If invocation failed (not found, permission denied, timed out, wait
//!    error, undecodable output), the report is the failure description alone.
//! 4. Overwrite the output file with the report.
//!
//! Invocation failures are never returned to the caller. The only error that
//! leaves this module is failure to write the output file.
//!
//! ## File Format
//!
//! ```text
//! <stdout>
//! Error:
//! <stderr>
//! ```
//!
//! i.e. `stdout + "\nError:\n" + stderr`, with no trailing newline added.
//!
use crate::common::{fs::io, process};
use crate::core::config::CaptureSettings;
use crate::core::error::{InvocationError, Result};
use tracing::{debug, info};

/// Sits between the captured stdout and stderr in a success report.
pub const REPORT_SEPARATOR: &str = "\nError:\n";

/// Outcome of one attempt to run the status query.
#[derive(Debug)]
pub enum InvocationResult {
    /// The command ran within the time bound, whatever its exit code.
    Captured { stdout: String, stderr: String },
    /// The command could not be run to completion.
    Failed(InvocationError),
}

impl InvocationResult {
    /// Renders the text written to the output file.
    pub fn render(&self) -> String {
        match self {
            Self::Captured { stdout, stderr } => {
                let mut report =
                    String::with_capacity(stdout.len() + REPORT_SEPARATOR.len() + stderr.len());
                report.push_str(stdout);
                report.push_str(REPORT_SEPARATOR);
                report.push_str(stderr);
                report
            }
            Self::Failed(err) => err.to_string(),
        }
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, Self::Captured { .. })
    }
}

/// Runs the configured command and folds every outcome into an `InvocationResult`.
pub async fn invoke(settings: &CaptureSettings) -> InvocationResult {
    match process::run_captured(&settings.program, &settings.args, settings.timeout).await {
        Ok(output) => {
            // A failing exit (e.g. outside a repository) still produces a report.
            info!(
                "`{}` finished with {}",
                process::display_command(&settings.program, &settings.args),
                output.status
            );
            InvocationResult::Captured {
                stdout: output.stdout,
                stderr: output.stderr,
            }
        }
        Err(err) => {
            info!("Invocation failed: {}", err);
            InvocationResult::Failed(err)
        }
    }
}

/// # Capture With Settings (`capture_with`)
///
/// Invokes the command described by `settings` and overwrites
/// `settings.output_path` with the rendered report.
///
/// ## Returns
///
/// * `Ok(InvocationResult)` - the outcome that was written, success or failure.
/// * `Err` - only if the output file could not be written.
pub async fn capture_with(settings: &CaptureSettings) -> Result<InvocationResult> {
    let result = invoke(settings).await;
    let report = result.render();
    io::write_string_to_file(&settings.output_path, &report)?;
    debug!(
        "Report ({}) written to {:?}",
        if result.is_captured() { "captured" } else { "failed" },
        settings.output_path
    );
    Ok(result)
}

/// # Capture Status (`capture_status`)
///
/// Entry point used by `main`: runs `git status` with the fixed settings
/// (10 second bound, `git_status.txt` in the working directory).
pub async fn capture_status() -> Result<()> {
    info!("Capturing git status...");
    capture_with(&CaptureSettings::default()).await?;
    Ok(())
}
