//! Shell command execution.
//!
//! Every external process goes through the [`Shell`] trait so the
//! preflight sequence can be driven by [`SystemShell`] in production and
//! by [`MockShell`] in tests.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, OutputVisibility};
pub use mock::{Invocation, MockShell};
pub use platform::Platform;

use std::path::Path;

use crate::error::Result;

/// Trait for running shell commands.
///
/// This trait allows mocking process execution in tests.
pub trait Shell {
    /// Run a capability probe.
    ///
    /// Output is discarded whether the command succeeds or not.
    fn probe(&mut self, command: &str, cwd: &Path) -> Result<CommandResult>;

    /// Run a command with output inherited from this process.
    fn run(&mut self, command: &str, cwd: &Path) -> Result<CommandResult>;
}

/// [`Shell`] backed by real child processes.
#[derive(Debug, Clone, Copy)]
pub struct SystemShell {
    platform: Platform,
}

impl SystemShell {
    /// Create a shell for the running platform.
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Create a shell for a specific platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self { platform }
    }

    fn options(&self, cwd: &Path, visibility: OutputVisibility) -> CommandOptions {
        CommandOptions {
            platform: self.platform,
            cwd: Some(cwd.to_path_buf()),
            visibility,
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for SystemShell {
    fn probe(&mut self, command: &str, cwd: &Path) -> Result<CommandResult> {
        execute(command, &self.options(cwd, OutputVisibility::Silent))
    }

    fn run(&mut self, command: &str, cwd: &Path) -> Result<CommandResult> {
        execute(command, &self.options(cwd, OutputVisibility::Inherited))
    }
}
