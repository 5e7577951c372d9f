//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use std::io::Write;

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{GlobalOptions, BIN_NAME};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use devctl::{generate_banner, Factory, OutputKind};

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions, factory: &mut Factory) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        let streams = factory.streams();

        if !global.quiet {
            let err = &mut streams.err_out;
            writeln!(err, "# Generating {} completion script", self.shell)?;
            writeln!(err, "# Run the following command to enable completions:")?;

            match self.shell {
                Shell::Bash => {
                    writeln!(
                        err,
                        "#   devctl completions bash > ~/.local/share/bash-completion/completions/devctl"
                    )?;
                    writeln!(err, "# Or source it directly in ~/.bashrc:")?;
                    writeln!(err, "#   eval \"$(devctl completions bash)\"")?;
                }
                Shell::Zsh => {
                    writeln!(err, "#   devctl completions zsh > ~/.zsh/completions/_devctl")?;
                    writeln!(err, "# Make sure ~/.zsh/completions is in your $fpath")?;
                }
                Shell::Fish => {
                    writeln!(
                        err,
                        "#   devctl completions fish > ~/.config/fish/completions/devctl.fish"
                    )?;
                }
                Shell::PowerShell => {
                    writeln!(err, "#   devctl completions powershell > $PROFILE")?;
                }
                _ => {}
            }
            writeln!(err)?;
        }

        write!(streams.out, "{}", generate_banner("Completions", OutputKind::Shell))?;
        generate(self.shell, &mut cmd, BIN_NAME, &mut streams.out);

        Ok(())
    }
}
