//! Main entry point for the devctl CLI.
//!
//! It provides commands for inspecting and preparing the devctl directories:
//! - `paths`: Show the directories devctl uses
//! - `init`: Create the devctl directories and a default configuration
//! - `config`: Show the effective configuration
//! - `banner`: Render a decorative banner
//! - `completions`: Generate shell completion scripts

use std::io;

use clap::Parser;
use devctl::env::ProcessEnv;
use devctl_cli::error::report;
use devctl_cli::utils::{build_factory, install_logger, GlobalOptions};
use devctl_cli::{Cli, CliError, Command};

fn run(cli: Cli) -> Result<(), CliError> {
    // Initialize logging based on verbosity
    let logger = devctl::init_logger(cli.verbose, cli.quiet, &ProcessEnv);
    install_logger(logger);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    let mut factory = build_factory(logger)?;

    match cli.command {
        Command::Paths(cmd) => cmd.execute(&global, &mut factory),
        Command::Init(cmd) => cmd.execute(&global, &mut factory),
        Command::Config(cmd) => cmd.execute(&global, &mut factory),
        Command::Banner(cmd) => cmd.execute(&global, &mut factory),
        Command::Completions(cmd) => cmd.execute(&global, &mut factory),
    }
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle errors and set exit code
    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => std::process::exit(report(e, &mut io::stderr())),
    }
}
