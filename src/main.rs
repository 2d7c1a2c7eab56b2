//! jwt-probe: an offline CLI for crafting tampered JWTs.
//!
//! Entry point for the application. Parses CLI arguments, sets up
//! logging, and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::Level;

use cli::{Cli, Commands};
use error::ProbeError;

fn main() -> ExitCode {
    // Usage errors exit 1 rather than clap's default of 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if e.kind() == ErrorKind::InvalidSubcommand {
                eprintln!("\n{}", Cli::command().render_help());
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(probe) = e.downcast_ref::<ProbeError>() {
                tracing::debug!(
                    malformed_token = probe.is_malformed_token(),
                    segment = ?probe.segment(),
                    "command failed"
                );
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr `tracing` subscriber; stdout stays reserved for reports.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Dispatch to the appropriate command handler.
fn run(cli: &Cli) -> Result<()> {
    tracing::debug!(command = ?cli.command, "dispatching");

    match &cli.command {
        Commands::Decode(args) => commands::decode::execute(args),
        Commands::NoneAttack(args) => commands::none_attack::execute(args),
        Commands::Modify(args) => commands::modify::execute(args),
        Commands::Expired(args) => commands::expired::execute(args),
        Commands::Malformed(args) => commands::malformed::execute(args),
    }
}
