//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Turns parsed arguments into a preflight run
//! - [`write_completions`] - Shell completion scripts

pub mod args;

pub use args::Cli;

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as CompletionShell;

use crate::config::PreflightConfig;
use crate::error::Result;
use crate::preflight::{Outcome, PreflightRunner};
use crate::shell::Shell;

/// Resolve configuration from `cli` and run the preflight on `shell`.
pub fn run(cli: &Cli, shell: &mut dyn Shell) -> Result<Outcome> {
    let config = PreflightConfig::from_cli(cli)?;
    PreflightRunner::new(&config, shell).run()
}

/// Write a completion script for `shell` to `out`.
pub fn write_completions(shell: CompletionShell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "bootstrap-preflight", out);
}
