//! Bootstrap preflight - verify build tools, then fetch third-party dependencies.
//!
//! The preflight runs three silent capability probes (Python, CMake, Git)
//! in order and stops at the first one that fails. When all pass it runs
//! `ThirdParty/bootstrap.py -b ThirdParty` through the interpreter with its
//! output visible.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolved settings for a run
//! - [`error`] - Error types and result aliases
//! - [`preflight`] - Tool probes and the ordered runner
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use bootstrap_preflight::config::PreflightConfig;
//! use bootstrap_preflight::preflight::{Interpreter, PreflightRunner};
//! use bootstrap_preflight::shell::MockShell;
//!
//! let config = PreflightConfig::new(PathBuf::from("."), Interpreter::new("python3"));
//! let mut shell = MockShell::new();
//! PreflightRunner::new(&config, &mut shell).run().unwrap();
//!
//! assert_eq!(shell.probes().len(), 3);
//! assert_eq!(shell.runs().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod preflight;
pub mod shell;

pub use error::{PreflightError, Result};
