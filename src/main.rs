//! Bootstrap preflight entry point.

use std::process::ExitCode;

use bootstrap_preflight::cli::{self, Cli};
use bootstrap_preflight::preflight::Outcome;
use bootstrap_preflight::shell::SystemShell;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only diagnostics.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("bootstrap_preflight=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bootstrap_preflight=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("bootstrap-preflight starting with args: {:?}", cli);

    if let Some(shell) = cli.completions {
        cli::write_completions(shell, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let mut shell = SystemShell::new();
    match cli::run(&cli, &mut shell) {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::DryRun { command }) => {
            println!("Would run: {}", command);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
