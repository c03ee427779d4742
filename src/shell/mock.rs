//! Mock shell implementation for testing.
//!
//! `MockShell` implements the [`Shell`] trait without spawning anything.
//! It records every invocation for later assertion and answers with
//! pre-configured exit codes.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use bootstrap_preflight::shell::{MockShell, Shell};
//!
//! let mut shell = MockShell::new();
//! shell.set_exit_code("git --version", 127);
//!
//! let result = shell.probe("git --version", Path::new(".")).unwrap();
//! assert!(!result.success);
//! assert_eq!(shell.commands(), vec!["git --version"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

use super::{CommandResult, OutputVisibility, Shell};

/// A single recorded call on [`MockShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Full command string.
    pub command: String,
    /// Working directory it was run in.
    pub cwd: PathBuf,
    /// Whether output was discarded or shown.
    pub visibility: OutputVisibility,
}

/// Mock shell for testing.
///
/// Commands with no configured exit code succeed.
#[derive(Debug, Default)]
pub struct MockShell {
    exit_codes: HashMap<String, i32>,
    spawn_failures: HashSet<String>,
    invocations: Vec<Invocation>,
}

impl MockShell {
    /// Create a mock where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`.
    pub fn set_exit_code(&mut self, command: &str, code: i32) {
        self.exit_codes.insert(command.to_string(), code);
    }

    /// Make `command` fail to spawn at all.
    pub fn fail_to_spawn(&mut self, command: &str) {
        self.spawn_failures.insert(command.to_string());
    }

    /// Get all recorded invocations in call order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Get the command strings of all invocations in call order.
    pub fn commands(&self) -> Vec<&str> {
        self.invocations.iter().map(|i| i.command.as_str()).collect()
    }

    /// Get the commands that were run as silent probes.
    pub fn probes(&self) -> Vec<&str> {
        self.by_visibility(OutputVisibility::Silent)
    }

    /// Get the commands that were run with visible output.
    pub fn runs(&self) -> Vec<&str> {
        self.by_visibility(OutputVisibility::Inherited)
    }

    fn by_visibility(&self, visibility: OutputVisibility) -> Vec<&str> {
        self.invocations
            .iter()
            .filter(|i| i.visibility == visibility)
            .map(|i| i.command.as_str())
            .collect()
    }

    fn record(
        &mut self,
        command: &str,
        cwd: &Path,
        visibility: OutputVisibility,
    ) -> Result<CommandResult> {
        self.invocations.push(Invocation {
            command: command.to_string(),
            cwd: cwd.to_path_buf(),
            visibility,
        });

        if self.spawn_failures.contains(command) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("mock spawn failure: {}", command),
            )
            .into());
        }

        match self.exit_codes.get(command) {
            Some(&code) if code != 0 => Ok(CommandResult::failure(Some(code), Duration::ZERO)),
            _ => Ok(CommandResult::success(Duration::ZERO)),
        }
    }
}

impl Shell for MockShell {
    fn probe(&mut self, command: &str, cwd: &Path) -> Result<CommandResult> {
        self.record(command, cwd, OutputVisibility::Silent)
    }

    fn run(&mut self, command: &str, cwd: &Path) -> Result<CommandResult> {
        self.record(command, cwd, OutputVisibility::Inherited)
    }
}
