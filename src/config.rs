//! Resolved settings for a preflight run.
//!
//! [`PreflightConfig`] is built once from the command line and then passed
//! by reference to the runner. With no flags it reproduces the fixed
//! defaults: platform interpreter, `ThirdParty/bootstrap.py`, and
//! `-b ThirdParty`, run from the current directory.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{PreflightError, Result};
use crate::preflight::Interpreter;
use crate::shell::Platform;

/// Directory holding third-party sources and the bootstrap script.
pub const THIRD_PARTY_DIR: &str = "ThirdParty";

/// File name of the delegated bootstrap script.
pub const BOOTSTRAP_SCRIPT: &str = "bootstrap.py";

/// Parameters passed to the bootstrap script.
pub const BOOTSTRAP_PARAMS: &str = "-b ThirdParty";

/// Settings for a preflight run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightConfig {
    /// Working directory for every probe and the delegated script.
    pub project_root: PathBuf,

    /// Interpreter used for the first probe and to run the script.
    pub interpreter: Interpreter,

    /// Script path, relative to `project_root`.
    pub script: PathBuf,

    /// Parameter string appended to the script command.
    pub script_params: String,

    /// Probe only; report the delegated command instead of running it.
    pub dry_run: bool,
}

impl PreflightConfig {
    /// Default settings rooted at `project_root`.
    pub fn new(project_root: PathBuf, interpreter: Interpreter) -> Self {
        Self {
            project_root,
            interpreter,
            script: default_script_path(),
            script_params: BOOTSTRAP_PARAMS.to_string(),
            dry_run: false,
        }
    }

    /// Build settings from parsed command-line arguments.
    ///
    /// Fails if `--project` does not name an existing directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = match &cli.project {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        ensure_directory(&project_root)?;

        let interpreter = cli
            .interpreter
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Interpreter::new)
            .unwrap_or_else(|| Interpreter::resolve(Platform::current()));

        let mut config = Self::new(project_root, interpreter);
        config.dry_run = cli.dry_run;

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// `ThirdParty` joined with `bootstrap.py` by the platform separator.
pub fn default_script_path() -> PathBuf {
    Path::new(THIRD_PARTY_DIR).join(BOOTSTRAP_SCRIPT)
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(PreflightError::ProjectNotFound {
            path: path.to_path_buf(),
        })
    }
}
