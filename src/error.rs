//! Error types for SecuPlug
//!
//! This module defines all error types used throughout the SecuPlug
//! framework. Uses `thiserror` for ergonomic error handling with automatic
//! `Display` and `Error` trait implementations.
//!
//! A child process exiting non-zero is deliberately NOT an error here:
//! command failure is contained inside the runner and surfaces as a
//! [`crate::runner::RunOutcome`], never as a `SecuError`.

use thiserror::Error;

/// The primary error type for SecuPlug operations.
#[derive(Error, Debug)]
pub enum SecuError {
    /// Output-processing errors raised by a plugin's processor hook.
    /// These propagate uncontained to the caller of `execute_command`.
    #[error("Processor error: {0}")]
    Processor(String),

    /// Standard I/O errors (document writes, pipe handling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for SecuPlug operations.
pub type Result<T> = std::result::Result<T, SecuError>;
