//! Ordered preflight sequence.

use std::path::Path;

use crate::config::PreflightConfig;
use crate::error::{PreflightError, Result};
use crate::shell::Shell;

use super::Tool;

/// How a successful preflight ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All probes passed and the delegated script exited 0.
    Completed,
    /// All probes passed; the delegated command was not run.
    DryRun { command: String },
}

/// Runs the capability probes and the delegated script.
pub struct PreflightRunner<'a> {
    config: &'a PreflightConfig,
    shell: &'a mut dyn Shell,
}

impl<'a> PreflightRunner<'a> {
    /// Create a runner for the given configuration.
    pub fn new(config: &'a PreflightConfig, shell: &'a mut dyn Shell) -> Self {
        Self { config, shell }
    }

    /// Verify a single tool with a silent probe.
    pub fn verify(&mut self, tool: Tool) -> Result<()> {
        let config = self.config;
        let interpreter = &config.interpreter;
        let command = tool.probe_command(interpreter);

        match self.shell.probe(&command, &config.project_root) {
            Ok(result) if result.success => {
                tracing::debug!(tool = tool.name(), "probe passed");
                Ok(())
            }
            Ok(result) => {
                tracing::debug!(tool = tool.name(), exit_code = ?result.exit_code, "probe failed");
                Err(tool.unavailable(interpreter))
            }
            Err(e) => {
                tracing::debug!(tool = tool.name(), error = %e, "probe could not start");
                Err(tool.unavailable(interpreter))
            }
        }
    }

    /// Verify every tool in order, stopping at the first failure.
    pub fn verify_all(&mut self) -> Result<()> {
        for tool in Tool::ALL {
            self.verify(tool)?;
        }
        Ok(())
    }

    /// Command line used to run `script` with `params`.
    pub fn script_command(&self, script: &Path, params: &str) -> String {
        format!("{} {} {}", self.config.interpreter, script.display(), params)
    }

    /// Run a script through the interpreter with visible output.
    ///
    /// Any non-zero exit becomes [`PreflightError::ScriptFailed`]; the
    /// script's own code is kept on the error but not used as the exit code.
    pub fn run_script(&mut self, script: &Path, params: &str) -> Result<()> {
        let command = self.script_command(script, params);
        let failed = |code| PreflightError::ScriptFailed {
            script: script.display().to_string(),
            code,
        };

        tracing::debug!(%command, "running delegated script");
        match self.shell.run(&command, &self.config.project_root) {
            Ok(result) if result.success => Ok(()),
            Ok(result) => {
                tracing::debug!(exit_code = ?result.exit_code, "delegated script failed");
                Err(failed(result.exit_code))
            }
            Err(e) => {
                tracing::debug!(error = %e, "delegated script could not start");
                Err(failed(None))
            }
        }
    }

    /// Run the full sequence: probes, then the configured script.
    pub fn run(mut self) -> Result<Outcome> {
        self.verify_all()?;

        let config = self.config;
        if config.dry_run {
            return Ok(Outcome::DryRun {
                command: self.script_command(&config.script, &config.script_params),
            });
        }

        self.run_script(&config.script, &config.script_params)?;
        Ok(Outcome::Completed)
    }
}
