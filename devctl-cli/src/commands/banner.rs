//! Command to render a decorative banner.

use std::io::Write;

use clap::Args;
use devctl::{generate_banner, Factory, OutputKind};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Render a decorative banner.
#[derive(Args)]
pub struct BannerCommand {
    /// Text to render
    pub text: String,

    /// Comment style of the target file
    #[arg(long, value_enum, default_value_t = OutputKind::Shell)]
    pub kind: OutputKind,
}

impl BannerCommand {
    /// Execute the banner command.
    pub fn execute(self, _global: &GlobalOptions, factory: &mut Factory) -> Result<(), CliError> {
        write!(factory.streams().out, "{}", generate_banner(&self.text, self.kind))?;
        Ok(())
    }
}
