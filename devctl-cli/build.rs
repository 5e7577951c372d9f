//! Build script for devctl-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("devctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage developer tools, SDKs and plugins")
        .long_about(
            "Command-line tool for managing developer tools, SDKs and plugins. \
             Directories are resolved from DEVCTL_CONFIG_HOME, XDG_CONFIG_HOME and the \
             platform convention, caches from DEVCTL_CACHE_HOME and XDG_CACHE_HOME.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("paths")
                .about("Show the directories devctl uses")
                .long_about("Print one resolved directory, optionally joined with sub-path elements, or all of them"),
            Command::new("init")
                .about("Create the devctl directories and a default configuration")
                .long_about("Create the configuration root with its config, bin, downloads, sdks and plugins directories"),
            Command::new("config")
                .about("Show the effective configuration")
                .long_about("Print the configuration after applying the file and environment overrides"),
            Command::new("banner")
                .about("Render a decorative banner")
                .long_about("Render text as a commented FIGlet banner for shell, YAML or source files"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("devctl.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
