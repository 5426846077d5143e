//! # gitsnap Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs an external command as a child process and captures its standard
//! output and standard error as text. A single timeout starts before the
//! spawn and covers both spawning and waiting. This is the only place gitsnap
//! touches `tokio::process`.
//!
//! ## Architecture
//!
//! - The child inherits the caller's environment and working directory.
//!   Stdin is null, stdout and stderr are piped.
//! - Spawn and wait run under one `tokio::time::timeout`. The child is spawned
//!   with `kill_on_drop(true)`, so when the bound expires and the future is
//!   dropped the child is killed rather than left running.
//! - Both streams are decoded as UTF-8 with universal newlines (`\r\n` and a
//!   lone `\r` both become `\n`). Output that does not decode is an error,
//!   the same as a spawn or wait failure.
//! - A non-zero exit status is *not* an error here. The status is returned in
//!   `CapturedOutput` for the caller to log.
//!
//! Every failure is an `InvocationError`; nothing in this module decides what
//! to do with it.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::common::process;
//! use std::time::Duration;
//!
//! let args = vec!["status".to_string()];
//! match process::run_captured("git", &args, Duration::from_secs(10)).await {
//!     Ok(output) => println!("{}", output.stdout),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
use crate::core::error::InvocationError;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Text captured from a child that ran to completion within the time bound.
#[derive(Debug)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// Runs `program` with `args`, waiting at most `timeout` for it to exit.
///
/// # Errors
///
/// - `InvocationError::Spawn` if the process cannot be started (not found,
///   permission denied, ...).
/// - `InvocationError::TimedOut` if it has not exited within `timeout`. The
///   child is killed.
/// - `InvocationError::Wait` if collecting its output fails.
/// - `InvocationError::Decode` if either stream is not valid UTF-8.
#[instrument(skip(args, timeout))]
pub async fn run_captured(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<CapturedOutput, InvocationError> {
    let command = display_command(program, args);

    // The bound covers the spawn as well as the wait.
    let run = async {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| InvocationError::Spawn {
                command: command.clone(),
                source,
            })?;
        debug!("Spawned `{}` (pid {:?})", command, child.id());
        child
            .wait_with_output()
            .await
            .map_err(|source| InvocationError::Wait {
                command: command.clone(),
                source,
            })
    };

    // Dropping `run` on expiry drops the child, which kills it.
    let outcome = tokio::time::timeout(timeout, run).await;
    let output = match outcome {
        Ok(result) => result?,
        Err(_elapsed) => return Err(InvocationError::TimedOut { command, timeout }),
    };
    debug!(
        "`{}` exited with {} ({} bytes stdout, {} bytes stderr)",
        command,
        output.status,
        output.stdout.len(),
        output.stderr.len()
    );

    let stdout = decode(&command, "stdout", output.stdout)?;
    let stderr = decode(&command, "stderr", output.stderr)?;

    Ok(CapturedOutput {
        stdout,
        stderr,
        status: output.status,
    })
}

fn decode(
    command: &str,
    stream: &'static str,
    bytes: Vec<u8>,
) -> Result<String, InvocationError> {
    let text = String::from_utf8(bytes).map_err(|source| InvocationError::Decode {
        command: command.to_string(),
        stream,
        source,
    })?;
    Ok(normalize_newlines(text))
}

/// `\r\n` and lone `\r` become `\n`, as text-mode reads do.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Program and arguments joined by spaces, as shown in failure descriptions.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
