//! Preflight checks and delegation to the bootstrap script.
//!
//! The runner verifies each [`Tool`] in order, stopping at the first one
//! that cannot be run, and then hands off to the delegated script.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use bootstrap_preflight::config::PreflightConfig;
//! use bootstrap_preflight::preflight::{Interpreter, Outcome, PreflightRunner};
//! use bootstrap_preflight::shell::MockShell;
//!
//! let config = PreflightConfig::new(PathBuf::from("."), Interpreter::new("python3"));
//! let mut shell = MockShell::new();
//! shell.set_exit_code("git --version", 1);
//!
//! let err = PreflightRunner::new(&config, &mut shell).run().unwrap_err();
//! assert_eq!(err.to_string(), "Git not installed.");
//! ```

pub mod runner;
pub mod tool;

pub use runner::{Outcome, PreflightRunner};
pub use tool::{Interpreter, Tool};
