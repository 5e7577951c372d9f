//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BannerCommand, CompletionsCommand, ConfigCommand, InitCommand, PathsCommand,
};
use clap::{Parser, Subcommand};

/// Plugin and SDK manager for developer machines.
#[derive(Parser)]
#[command(name = "devctl")]
#[command(version, about = "Manage developer tools, SDKs and plugins", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the directories devctl uses
    Paths(PathsCommand),

    /// Create the devctl directories and a default configuration
    Init(InitCommand),

    /// Show the effective configuration
    Config(ConfigCommand),

    /// Render a decorative banner
    Banner(BannerCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
