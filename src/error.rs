//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the single failure type returned
//! by every checkpoint, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each checkpoint maps to exactly one variant with a fixed message
//! - Every variant exits the process with [`FAILURE_EXIT_CODE`]
//! - Only `main` prints the message and terminates

use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for every failure.
pub const FAILURE_EXIT_CODE: u8 = 255;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// The scripting interpreter could not be run.
    #[error("Make sure you can run Python scripts from the command line.")]
    InterpreterUnavailable { interpreter: String },

    /// `cmake --version` failed.
    #[error("CMake not installed.")]
    CmakeUnavailable,

    /// `git --version` failed.
    #[error("Git not installed.")]
    GitUnavailable,

    /// The delegated bootstrap script exited non-zero or could not start.
    #[error("Unable to run {script}")]
    ScriptFailed { script: String, code: Option<i32> },

    /// `--project` does not name a directory.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PreflightError {
    /// Process exit code for this failure.
    ///
    /// Failure kinds are told apart by message only.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
