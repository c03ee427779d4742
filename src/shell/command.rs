//! Child process execution through the platform shell.

use crate::error::Result;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::Platform;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: false,
        }
    }
}

/// Where a command's output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputVisibility {
    /// Stdout and stderr both go to the null device.
    Silent,
    /// Stdout and stderr are shared with this process.
    #[default]
    Inherited,
}

/// Options for command execution.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Platform whose shell interprets the command.
    pub platform: Platform,

    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Output handling.
    pub visibility: OutputVisibility,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            cwd: None,
            visibility: OutputVisibility::default(),
        }
    }
}

/// Execute a shell command and wait for it to finish.
///
/// Returns `Err` only when the shell itself cannot be spawned; a command
/// that runs and exits non-zero is an `Ok` failure result.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(options.platform.shell_program());
    cmd.arg(options.platform.shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    match options.visibility {
        OutputVisibility::Silent => {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }
        OutputVisibility::Inherited => {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }
    }

    let status = cmd.status()?;
    let duration = start.elapsed();

    tracing::debug!(
        command,
        exit_code = ?status.code(),
        elapsed_ms = duration.as_millis() as u64,
        "command finished"
    );

    if status.success() {
        Ok(CommandResult::success(duration))
    } else {
        Ok(CommandResult::failure(status.code(), duration))
    }
}
