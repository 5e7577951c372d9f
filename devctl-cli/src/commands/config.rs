//! Command to show the effective configuration.

use std::io::Write;

use clap::Args;
use devctl::env::ProcessEnv;
use devctl::{ConfigLoader, Factory};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Show the effective configuration.
#[derive(Args)]
pub struct ConfigCommand {
    /// Print the configuration file path instead of its contents
    #[arg(long)]
    pub path: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, _global: &GlobalOptions, factory: &mut Factory) -> Result<(), CliError> {
        if self.path {
            let path = factory.pather().config_file_path()?;
            writeln!(factory.streams().out, "{}", path.display())?;
            return Ok(());
        }

        let config = ConfigLoader::load(factory.fs(), factory.pather(), &ProcessEnv)?;
        let yaml = serde_yaml::to_string(&config).map_err(devctl::Error::from)?;
        write!(factory.streams().out, "{yaml}")?;
        Ok(())
    }
}
