//! Command to show the resolved devctl directories.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use devctl::Factory;

use crate::error::{usage_error, CliError};
use crate::utils::{GlobalOptions, BIN_NAME};

/// A directory devctl resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Location {
    /// Root of the configuration tree
    Root,
    /// The CLI configuration file
    ConfigFile,
    /// Configuration files
    Config,
    /// Binaries
    Bin,
    /// Downloaded archives
    Downloads,
    /// Installed SDKs
    Sdks,
    /// Plugins
    Plugins,
    /// Cached files
    Cache,
    /// Base of the plugin install layout
    InstallRoot,
}

impl Location {
    /// Every location, in display order.
    pub const ALL: [Location; 9] = [
        Location::Root,
        Location::ConfigFile,
        Location::Config,
        Location::Bin,
        Location::Downloads,
        Location::Sdks,
        Location::Plugins,
        Location::Cache,
        Location::InstallRoot,
    ];

    /// Name used on the command line and in the listing.
    pub fn name(self) -> &'static str {
        match self {
            Location::Root => "root",
            Location::ConfigFile => "config-file",
            Location::Config => "config",
            Location::Bin => "bin",
            Location::Downloads => "downloads",
            Location::Sdks => "sdks",
            Location::Plugins => "plugins",
            Location::Cache => "cache",
            Location::InstallRoot => "install-root",
        }
    }

    /// Resolve this location, joined with `sub`.
    pub fn resolve(self, factory: &Factory, sub: &[&str]) -> Result<PathBuf, CliError> {
        let pather = factory.pather();
        let path = match self {
            Location::Root => pather.config_root(sub)?,
            Location::ConfigFile => pather.config_file_path()?,
            Location::Config => pather.config(sub)?,
            Location::Bin => pather.bin(sub)?,
            Location::Downloads => pather.download(sub)?,
            Location::Sdks => pather.sdk(sub)?,
            Location::Plugins => pather.plugin(sub)?,
            Location::Cache => pather.cache(sub),
            Location::InstallRoot => factory.layout().subdir(sub),
        };
        Ok(path)
    }
}

/// Show the directories devctl uses.
#[derive(Args)]
pub struct PathsCommand {
    /// Only show this directory
    #[arg(value_enum)]
    pub which: Option<Location>,

    /// Path elements appended to the directory
    #[arg(requires = "which")]
    pub sub: Vec<String>,

    /// Print a JSON object instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, _global: &GlobalOptions, factory: &mut Factory) -> Result<(), CliError> {
        let sub: Vec<&str> = self.sub.iter().map(String::as_str).collect();

        if self.which == Some(Location::ConfigFile) && !sub.is_empty() {
            return Err(usage_error(
                &format!("{BIN_NAME} paths"),
                "the config file location takes no sub-path",
            ));
        }

        let locations: Vec<Location> = match self.which {
            Some(which) => vec![which],
            None => Location::ALL.to_vec(),
        };

        let mut resolved = Vec::with_capacity(locations.len());
        for location in locations {
            resolved.push((location, location.resolve(factory, &sub)?));
        }

        let out = &mut factory.streams().out;
        if self.json {
            let map: BTreeMap<&str, String> = resolved
                .iter()
                .map(|(location, path)| (location.name(), path.display().to_string()))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        } else if let [(_, path)] = resolved.as_slice() {
            writeln!(out, "{}", path.display())?;
        } else {
            for (location, path) in &resolved {
                writeln!(out, "{:<13}{}", location.name(), path.display())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devctl::context::{IoStreams, SharedBuffer};
    use devctl::env::MapEnv;
    use devctl::fs::MemFs;
    use devctl::path::FixedHomeDir;
    use devctl::system::{Os, StaticRuntimeInfo};
    use devctl::{InstallLayout, Pather};

    fn factory() -> (Factory, SharedBuffer) {
        let (streams, out, _err) = IoStreams::in_memory("");
        let pather = Pather::builder()
            .with_app_prefix("test_devctl")
            .with_environment(MapEnv::new())
            .with_runtime_info(StaticRuntimeInfo::os(Os::Linux))
            .with_home_lookup(FixedHomeDir(Some(PathBuf::from("/home/u"))))
            .build();
        let factory = Factory::builder()
            .with_io(streams)
            .with_fs(MemFs::new())
            .with_pather(pather)
            .with_layout(InstallLayout::new("/home/u/.devctl"))
            .build()
            .unwrap();
        (factory, out)
    }

    fn run(which: Option<Location>, sub: &[&str], json: bool) -> Result<String, CliError> {
        let (mut factory, out) = factory();
        let cmd = PathsCommand {
            which,
            sub: sub.iter().map(ToString::to_string).collect(),
            json,
        };
        cmd.execute(&GlobalOptions::default(), &mut factory)?;
        Ok(out.contents())
    }

    #[test]
    fn test_single_location() {
        assert_eq!(
            run(Some(Location::Bin), &[], false).unwrap(),
            "/home/u/.config/.test_devctl/bin\n"
        );
    }

    #[test]
    fn test_single_location_with_sub_path() {
        assert_eq!(
            run(Some(Location::Sdks), &["go", "1.22"], false).unwrap(),
            "/home/u/.config/.test_devctl/sdks/go/1.22\n"
        );
    }

    #[test]
    fn test_listing_contains_every_location() {
        let out = run(None, &[], false).unwrap();
        assert_eq!(out.lines().count(), Location::ALL.len());
        assert!(out.contains("cache        /home/u/.cache/io.alexheld.test_devctl\n"));
        assert!(out.contains("install-root /home/u/.devctl\n"));
        assert!(out.contains("config-file  /home/u/.config/.test_devctl/config.yaml\n"));
    }

    #[test]
    fn test_json_output() {
        let out = run(Some(Location::Plugins), &[], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["plugins"], "/home/u/.config/.test_devctl/plugins");
    }

    #[test]
    fn test_config_file_rejects_sub_path() {
        let err = run(Some(Location::ConfigFile), &["x"], false).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert!(err.to_string().contains("See 'devctl paths -h'"));
    }

    #[test]
    fn test_names_match_clap_values() {
        for location in Location::ALL {
            let value = location.to_possible_value().unwrap();
            assert_eq!(value.get_name(), location.name());
        }
    }
}
