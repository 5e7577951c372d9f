//! Resolution of devctl's configuration, cache and data directories.
//!
//! A [`Pather`] computes every path on demand from its immutable settings,
//! the environment and the host platform. Nothing is cached.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::env::{
    Environment, ProcessEnv, CACHE_HOME_VAR, CONFIG_HOME_ROOT_VAR, HOME_VAR, XDG_CACHE_HOME_VAR,
    XDG_CONFIG_HOME_VAR,
};
use crate::error::{Error, Result};
use crate::path::prefix::AppPrefix;
use crate::path::providers::{
    CacheRootProvider, ConfigRootProvider, HomeDirLookup, HomeProvider, SystemHomeDir,
};
use crate::system::{Os, OsRuntimeInfo, RuntimeInfoGetter};

/// Application name used when no prefix is configured.
pub const DEFAULT_APP_PREFIX: &str = "devctl";

/// File name of the CLI's own configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

type SharedHome = Arc<dyn HomeProvider + Send + Sync>;
type SharedCacheRoot = Arc<dyn CacheRootProvider + Send + Sync>;
type SharedConfigRoot = Arc<dyn ConfigRootProvider + Send + Sync>;
type SharedEnv = Arc<dyn Environment + Send + Sync>;
type SharedRuntime = Arc<dyn RuntimeInfoGetter + Send + Sync>;
type SharedHomeLookup = Arc<dyn HomeDirLookup + Send + Sync>;

/// Resolves the paths devctl uses on disk.
///
/// Configuration root precedence:
/// 1. config-root override
/// 2. user-home override plus the platform suffix
/// 3. `DEVCTL_CONFIG_HOME`, used verbatim
/// 4. `XDG_CONFIG_HOME` plus the prefix
/// 5. the OS convention (`~/.config/<prefix>` on Linux, `~/<prefix>` on macOS)
///
/// # Examples
///
/// ```
/// use devctl::path::Pather;
/// use std::path::PathBuf;
///
/// let pather = Pather::builder()
///     .with_app_prefix("test_devctl")
///     .with_config_root_fn(|| PathBuf::from("/etc/devctl"))
///     .build();
///
/// assert_eq!(pather.bin(&["tool"]).unwrap(), PathBuf::from("/etc/devctl/bin/tool"));
/// ```
#[derive(Clone)]
pub struct Pather {
    prefix: AppPrefix,
    config_file: String,
    user_home: Option<SharedHome>,
    cache_root: Option<SharedCacheRoot>,
    config_root: Option<SharedConfigRoot>,
    env: SharedEnv,
    runtime: SharedRuntime,
    home_lookup: SharedHomeLookup,
}

impl Default for Pather {
    fn default() -> Self {
        PatherBuilder::new().build()
    }
}

impl fmt::Debug for Pather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pather")
            .field("prefix", &self.prefix)
            .field("config_file", &self.config_file)
            .field("user_home_override", &self.user_home.is_some())
            .field("cache_root_override", &self.cache_root.is_some())
            .field("config_root_override", &self.config_root.is_some())
            .finish_non_exhaustive()
    }
}

impl Pather {
    /// Create a pather with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the defaults and override selected settings.
    #[must_use]
    pub fn builder() -> PatherBuilder {
        PatherBuilder::new()
    }

    /// The normalized application prefix.
    #[must_use]
    pub fn app_prefix(&self) -> &AppPrefix {
        &self.prefix
    }

    /// Base name of the CLI's configuration file.
    #[must_use]
    pub fn config_file_name(&self) -> &str {
        &self.config_file
    }

    /// Path of the configuration file used to configure the CLI itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] if the root falls back to an OS
    /// convention that does not exist for this platform.
    pub fn config_file_path(&self) -> Result<PathBuf> {
        self.config_root(&[self.config_file.as_str()])
    }

    /// Root directory of the CLI configuration, joined with `elems`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] if no override applies and the
    /// platform has no directory convention.
    pub fn config_root(&self, elems: &[&str]) -> Result<PathBuf> {
        let os = self.runtime.get().os;

        if let Some(provider) = &self.config_root {
            log::debug!("config root from override");
            return Ok(join_elems(provider.config_root(), elems));
        }

        if let Some(provider) = &self.user_home {
            log::debug!("config root from user home override");
            let home = provider.user_home();
            let root = match &os {
                Os::Linux => home.join(".config").join(self.prefix.as_str()),
                Os::Darwin => home.join(self.prefix.as_str()),
                Os::Other(name) => {
                    log::warn!("os '{name}' is not supported yet; using the macOS layout");
                    home.join(self.prefix.as_str())
                }
            };
            return Ok(join_elems(root, elems));
        }

        if let Some(base) = self.env.non_empty_var(CONFIG_HOME_ROOT_VAR) {
            log::debug!("config root from {CONFIG_HOME_ROOT_VAR}");
            return Ok(join_elems(PathBuf::from(base), elems));
        }

        if let Some(base) = self.env.non_empty_var(XDG_CONFIG_HOME_VAR) {
            log::debug!("config root from {XDG_CONFIG_HOME_VAR}");
            let root = PathBuf::from(base).join(self.prefix.as_str());
            return Ok(join_elems(root, elems));
        }

        let root = self.os_config_home(&os)?;
        Ok(join_elems(root, elems))
    }

    /// Directory for configuration files.
    ///
    /// # Errors
    ///
    /// See [`Pather::config_root`].
    pub fn config(&self, elems: &[&str]) -> Result<PathBuf> {
        self.resolve_sub_dir("config", elems)
    }

    /// Directory for executable binaries.
    ///
    /// # Errors
    ///
    /// See [`Pather::config_root`].
    pub fn bin(&self, elems: &[&str]) -> Result<PathBuf> {
        self.resolve_sub_dir("bin", elems)
    }

    /// Directory downloads are saved to.
    ///
    /// # Errors
    ///
    /// See [`Pather::config_root`].
    pub fn download(&self, elems: &[&str]) -> Result<PathBuf> {
        self.resolve_sub_dir("downloads", elems)
    }

    /// Directory SDKs are installed into.
    ///
    /// # Errors
    ///
    /// See [`Pather::config_root`].
    pub fn sdk(&self, elems: &[&str]) -> Result<PathBuf> {
        self.resolve_sub_dir("sdks", elems)
    }

    /// Directory plugins are installed into.
    ///
    /// # Errors
    ///
    /// See [`Pather::config_root`].
    pub fn plugin(&self, elems: &[&str]) -> Result<PathBuf> {
        self.resolve_sub_dir("plugins", elems)
    }

    /// Directory for cached files, joined with `elems`.
    ///
    /// The result always contains the `io.alexheld<prefix>` namespace right
    /// before `elems`. Precedence: cache override, `DEVCTL_CACHE_HOME`,
    /// `XDG_CACHE_HOME`, then `<home>/.cache`.
    #[must_use]
    pub fn cache(&self, elems: &[&str]) -> PathBuf {
        let namespace = self.prefix.cache_namespace();

        let base = if let Some(provider) = &self.cache_root {
            log::debug!("cache root from override");
            provider.cache_root()
        } else if let Some(base) = self.env.non_empty_var(CACHE_HOME_VAR) {
            log::debug!("cache root from {CACHE_HOME_VAR}");
            PathBuf::from(base)
        } else if let Some(base) = self.env.non_empty_var(XDG_CACHE_HOME_VAR) {
            log::debug!("cache root from {XDG_CACHE_HOME_VAR}");
            PathBuf::from(base)
        } else {
            self.user_home().join(".cache")
        };

        join_elems(base.join(namespace), elems)
    }

    fn resolve_sub_dir(&self, sub: &str, elems: &[&str]) -> Result<PathBuf> {
        Ok(join_elems(self.config_root(&[sub])?, elems))
    }

    fn os_config_home(&self, os: &Os) -> Result<PathBuf> {
        match os {
            Os::Linux => Ok(self
                .user_home()
                .join(".config")
                .join(self.prefix.as_str())),
            Os::Darwin => Ok(self.user_home().join(self.prefix.as_str())),
            Os::Other(name) => Err(Error::UnsupportedPlatform { os: name.clone() }),
        }
    }

    /// The OS home directory, falling back to `$HOME`.
    ///
    /// Yields an empty path when neither is available.
    fn user_home(&self) -> PathBuf {
        if let Some(home) = self
            .home_lookup
            .home_dir()
            .filter(|home| !home.as_os_str().is_empty())
        {
            return home;
        }

        if let Some(home) = self.env.non_empty_var(HOME_VAR) {
            return PathBuf::from(home);
        }

        log::warn!("cannot determine the user home directory; resolving relative paths");
        PathBuf::new()
    }
}

/// Builds a [`Pather`].
///
/// Starts from the defaults (prefix `devctl`, config file `config.yaml`, no
/// overrides, process environment, compile-time platform, OS home lookup).
/// Later calls for the same setting replace earlier ones.
#[derive(Clone)]
pub struct PatherBuilder {
    prefix: AppPrefix,
    config_file: String,
    user_home: Option<SharedHome>,
    cache_root: Option<SharedCacheRoot>,
    config_root: Option<SharedConfigRoot>,
    env: SharedEnv,
    runtime: SharedRuntime,
    home_lookup: SharedHomeLookup,
}

impl Default for PatherBuilder {
    fn default() -> Self {
        Self {
            prefix: AppPrefix::new(DEFAULT_APP_PREFIX),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            user_home: None,
            cache_root: None,
            config_root: None,
            env: Arc::new(ProcessEnv),
            runtime: Arc::new(OsRuntimeInfo),
            home_lookup: Arc::new(SystemHomeDir),
        }
    }
}

impl PatherBuilder {
    /// Create a builder holding the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix used in every derived directory name.
    #[must_use]
    pub fn with_app_prefix(mut self, name: impl AsRef<str>) -> Self {
        self.prefix = AppPrefix::new(name);
        self
    }

    /// Set the file name of the CLI configuration file.
    #[must_use]
    pub fn with_config_file(mut self, name: impl Into<String>) -> Self {
        self.config_file = name.into();
        self
    }

    /// Replace the home directory lookup for configuration paths.
    #[must_use]
    pub fn with_user_home_fn(mut self, provider: impl HomeProvider + Send + Sync + 'static) -> Self {
        self.user_home = Some(Arc::new(provider));
        self
    }

    /// Fully determine the configuration root.
    #[must_use]
    pub fn with_config_root_fn(
        mut self,
        provider: impl ConfigRootProvider + Send + Sync + 'static,
    ) -> Self {
        self.config_root = Some(Arc::new(provider));
        self
    }

    /// Replace the cache base directory lookup.
    #[must_use]
    pub fn with_cache_path_fn(
        mut self,
        provider: impl CacheRootProvider + Send + Sync + 'static,
    ) -> Self {
        self.cache_root = Some(Arc::new(provider));
        self
    }

    /// Read environment variables from `env` instead of the process.
    #[must_use]
    pub fn with_environment(mut self, env: impl Environment + Send + Sync + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Take the platform from `runtime` instead of the compile target.
    #[must_use]
    pub fn with_runtime_info(
        mut self,
        runtime: impl RuntimeInfoGetter + Send + Sync + 'static,
    ) -> Self {
        self.runtime = Arc::new(runtime);
        self
    }

    /// Replace the OS home directory lookup used by the conventions.
    #[must_use]
    pub fn with_home_lookup(mut self, lookup: impl HomeDirLookup + Send + Sync + 'static) -> Self {
        self.home_lookup = Arc::new(lookup);
        self
    }

    /// Freeze the settings into a [`Pather`].
    #[must_use]
    pub fn build(self) -> Pather {
        Pather {
            prefix: self.prefix,
            config_file: self.config_file,
            user_home: self.user_home,
            cache_root: self.cache_root,
            config_root: self.config_root,
            env: self.env,
            runtime: self.runtime,
            home_lookup: self.home_lookup,
        }
    }
}

/// Join `elems` onto `base`.
///
/// Elements are always relative to `base`: leading separators are stripped
/// and empty elements skipped.
pub(crate) fn join_elems(base: PathBuf, elems: &[&str]) -> PathBuf {
    elems
        .iter()
        .map(|elem| elem.trim_start_matches(std::path::is_separator))
        .filter(|elem| !elem.is_empty())
        .fold(base, |path, elem| path.join(Path::new(elem)))
}

/// File name of the index for the named repository.
///
/// # Examples
///
/// ```
/// use devctl::path::cache_index_file;
///
/// assert_eq!(cache_index_file("stable"), "stable-index.yaml");
/// assert_eq!(cache_index_file(""), "index.yaml");
/// ```
#[must_use]
pub fn cache_index_file(name: &str) -> String {
    repository_file(name, "index.yaml")
}

/// File name of the text file listing all charts of the named repository.
#[must_use]
pub fn cache_charts_file(name: &str) -> String {
    repository_file(name, "charts.txt")
}

fn repository_file(name: &str, suffix: &str) -> String {
    if name.is_empty() {
        suffix.to_string()
    } else {
        format!("{name}-{suffix}")
    }
}
