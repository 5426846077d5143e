//! # gitsnap Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Captures the output of `git status` into `git_status.txt` in the current
//! directory. This file handles:
//! - Command-line argument parsing using Clap (only `--help`, `--version`, `-v`)
//! - Setting up diagnostics based on the verbosity flag
//! - Running the capture and reporting the one error that can escape it
//!
//! ## Examples
//!
//! ```bash
//! # Capture into ./git_status.txt
//! gitsnap
//!
//! # Same, with diagnostics on stderr
//! gitsnap -vv
//! ```
//!
//! Every invocation outcome (success, git not found, timeout, ...) ends up in
//! the file and the process exits 0. Exit code 1 means the file itself could
//! not be written.
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The capture command.
mod common; // Process and filesystem utilities.
mod core; // Settings and error types.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gitsnap",
    about = "Capture `git status` output into git_status.txt",
    long_about = "Runs `git status` in the current directory (10 second limit) and writes its\n\
                  stdout, an `Error:` line, and its stderr to ./git_status.txt.\n\
                  If git cannot be run, the failure description is written instead.",
    version
)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::capture::capture_status().await {
        tracing::error!("Capture failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
