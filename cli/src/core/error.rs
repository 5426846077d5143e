//! # gitsnap Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout gitsnap. There are two
//! layers, kept apart on purpose:
//!
//! - `InvocationError`: everything that can go wrong while running the status
//!   query (spawning, waiting, the time bound, decoding its output). These are
//!   never propagated out of the capture command; their `Display` text *is*
//!   the content written to the output file on failure.
//! - The `Result<T>` alias (`anyhow::Result<T>`): the application layer. The
//!   only thing that travels up to `main` is a failure to write the output
//!   file itself.
//!
//! ## Examples
//!
//! ```ignore
//! // An invocation failure turns into file content, not an early return.
//! let description = InvocationError::TimedOut {
//!     command: "git status".into(),
//!     timeout: Duration::from_secs(10),
//! }
//! .to_string();
//! assert_eq!(description, "command `git status` timed out after 10 seconds");
//!
//! // Application errors carry context through anyhow.
//! fs::write(&path, report).with_context(|| format!("Failed to write {:?}", path))?;
//! ```
//!
use std::time::Duration;
use thiserror::Error;

/// Why the status query could not produce a pair of captured streams.
///
/// The command is stored as its display form (`git status`) so the
/// description stays readable without the caller re-joining arguments.
#[derive(Error, Debug)]
pub enum InvocationError {
    /// The process could not be started: executable not found, permission
    /// denied, and the like.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` timed out after {} seconds", format_secs(.timeout))]
    TimedOut { command: String, timeout: Duration },

    #[error("failed while waiting on `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("output of `{command}` on {stream} is not valid UTF-8: {source}")]
    Decode {
        command: String,
        stream: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Whole seconds print without a fraction ("10"), anything else keeps it ("0.25").
fn format_secs(timeout: &Duration) -> String {
    if timeout.subsec_nanos() == 0 {
        timeout.as_secs().to_string()
    } else {
        timeout.as_secs_f64().to_string()
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
