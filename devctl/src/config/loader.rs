//! Configuration file loading.

use std::path::Path;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::env::Environment;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::path::Pather;

/// Loads the CLI configuration.
///
/// # Examples
///
/// ```
/// use devctl::config::ConfigLoader;
/// use devctl::env::MapEnv;
/// use devctl::fs::MemFs;
/// use devctl::path::Pather;
/// use std::path::PathBuf;
///
/// let pather = Pather::builder()
///     .with_config_root_fn(|| PathBuf::from("/cfg"))
///     .build();
/// let config = ConfigLoader::load(&MemFs::new(), &pather, &MapEnv::new()).unwrap();
/// assert_eq!(config.index.name, "default");
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the effective configuration.
    ///
    /// Starts from the defaults, replaces them with the file at
    /// [`Pather::config_file_path`] if it exists, then applies environment
    /// overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the config path cannot be resolved, the file
    /// exists but cannot be read or parsed, or validation fails.
    pub fn load(fs: &dyn FileSystem, pather: &Pather, env: &dyn Environment) -> Result<Config> {
        let path = pather.config_file_path()?;
        let mut config = Self::load_file(fs, &path)?.unwrap_or_default();

        EnvironmentConfig::apply_overrides(&mut config, env);
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Parse the configuration file at `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist. A blank file yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(fs: &dyn FileSystem, path: &Path) -> Result<Option<Config>> {
        if !fs.exists(path) {
            log::debug!("no config file at {}", path.display());
            return Ok(None);
        }

        let contents = fs.read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Some(Config::default()));
        }

        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded config file {}", path.display());
        Ok(Some(config))
    }

    /// Write the default configuration to `path` unless a file is there.
    ///
    /// The parent directory is created when missing. Returns whether a file
    /// was written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn write_default(fs: &dyn FileSystem, path: &Path) -> Result<bool> {
        if fs.exists(path) {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs.write(path, yaml.as_bytes())?;
        log::info!("wrote default config to {}", path.display());
        Ok(true)
    }
}
