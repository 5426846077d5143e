//! # gitsnap Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the command and utility modules:
//! - `config`: the fixed `CaptureSettings` (program, arguments, timeout, output path)
//! - `error`: the invocation error enum and the application `Result` alias
//!
pub mod config;
pub mod error;
