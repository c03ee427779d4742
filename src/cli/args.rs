//! CLI argument definitions.
//!
//! Every flag is optional; running with no arguments performs the standard
//! preflight and bootstrap.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Check for Python, CMake and Git, then bootstrap third-party dependencies.
#[derive(Debug, Clone, Parser)]
#[command(name = "bootstrap-preflight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Interpreter command used to probe Python and run the bootstrap script
    #[arg(long, env = "PREFLIGHT_INTERPRETER")]
    pub interpreter: Option<String>,

    /// Run the checks and print the bootstrap command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit without running any checks
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
