//! Command to create the devctl directory tree.

use std::io::Write;

use clap::Args;
use devctl::{ConfigLoader, Factory};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Create the devctl directories and a default configuration.
#[derive(Args)]
pub struct InitCommand {
    /// Do not write a default configuration file
    #[arg(long)]
    pub skip_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions, factory: &mut Factory) -> Result<(), CliError> {
        let created = factory.ensure_directories()?;

        let config_path = factory.pather().config_file_path()?;
        let config_created = if self.skip_config {
            false
        } else {
            ConfigLoader::write_default(factory.fs(), &config_path)?
        };

        if global.quiet {
            return Ok(());
        }

        let out = &mut factory.streams().out;
        for dir in &created {
            writeln!(out, "created {}", dir.display())?;
        }
        if config_created {
            writeln!(out, "wrote {}", config_path.display())?;
        }
        if created.is_empty() && !config_created {
            writeln!(out, "already initialized")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devctl::context::{IoStreams, SharedBuffer};
    use devctl::fs::MemFs;
    use devctl::{InstallLayout, Pather};
    use std::path::{Path, PathBuf};

    fn factory() -> (Factory, SharedBuffer) {
        let (streams, out, _err) = IoStreams::in_memory("");
        let factory = Factory::builder()
            .with_io(streams)
            .with_fs(MemFs::new())
            .with_pather(
                Pather::builder()
                    .with_config_root_fn(|| PathBuf::from("/cfg"))
                    .build(),
            )
            .with_layout(InstallLayout::new("/home/u/.devctl"))
            .build()
            .unwrap();
        (factory, out)
    }

    #[test]
    fn test_init_creates_tree_and_config() {
        let (mut factory, out) = factory();
        InitCommand { skip_config: false }
            .execute(&GlobalOptions::default(), &mut factory)
            .unwrap();

        assert!(factory.fs().is_dir(Path::new("/cfg/plugins")));
        assert!(factory.fs().exists(Path::new("/cfg/config.yaml")));
        let out = out.contents();
        assert!(out.contains("created /cfg/sdks\n"));
        assert!(out.ends_with("wrote /cfg/config.yaml\n"));
    }

    #[test]
    fn test_init_twice_reports_nothing_new() {
        let (mut factory, out) = factory();
        let global = GlobalOptions::default();
        InitCommand { skip_config: false }
            .execute(&global, &mut factory)
            .unwrap();
        let first = out.contents();

        InitCommand { skip_config: false }
            .execute(&global, &mut factory)
            .unwrap();
        assert_eq!(&out.contents()[first.len()..], "already initialized\n");
    }

    #[test]
    fn test_init_skip_config_and_quiet() {
        let (mut factory, out) = factory();
        let global = GlobalOptions {
            quiet: true,
            ..GlobalOptions::default()
        };
        InitCommand { skip_config: true }
            .execute(&global, &mut factory)
            .unwrap();

        assert!(!factory.fs().exists(Path::new("/cfg/config.yaml")));
        assert!(out.contents().is_empty());
    }
}
