//! Tools that must be callable before bootstrapping.

use std::fmt;

use crate::error::PreflightError;
use crate::shell::Platform;

/// Command used to invoke the scripting interpreter.
///
/// Resolved once at startup and passed to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter(String);

impl Interpreter {
    /// Use an explicit interpreter command.
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    /// Pick the interpreter command for a platform.
    pub fn resolve(platform: Platform) -> Self {
        Self::new(platform.interpreter_command())
    }

    /// The command string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tool checked by a capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Interpreter,
    CMake,
    Git,
}

impl Tool {
    /// Tools in the order they are verified.
    pub const ALL: [Tool; 3] = [Tool::Interpreter, Tool::CMake, Tool::Git];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Interpreter => "python",
            Tool::CMake => "cmake",
            Tool::Git => "git",
        }
    }

    /// Command whose success proves the tool is callable.
    pub fn probe_command(self, interpreter: &Interpreter) -> String {
        match self {
            Tool::Interpreter => format!("{} --version", interpreter),
            Tool::CMake => "cmake --version".to_string(),
            Tool::Git => "git --version".to_string(),
        }
    }

    /// The failure reported when the probe does not succeed.
    pub fn unavailable(self, interpreter: &Interpreter) -> PreflightError {
        match self {
            Tool::Interpreter => PreflightError::InterpreterUnavailable {
                interpreter: interpreter.to_string(),
            },
            Tool::CMake => PreflightError::CmakeUnavailable,
            Tool::Git => PreflightError::GitUnavailable,
        }
    }
}
