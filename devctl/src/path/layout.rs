//! Install layout for plugins, indexes and receipts.
//!
//! Everything lives under one base directory, `~/.devctl` unless
//! `DEVCTL_ROOT` says otherwise:
//!
//! ```text
//! {base}/configs
//! {base}/index/{index}/plugins/{plugin}.yaml
//! {base}/receipts/{plugin}.yaml
//! {base}/store/{plugin}/{version}
//! {base}/bin
//! ```

use std::path::{Path, PathBuf};

use crate::env::{Environment, ROOT_VAR};
use crate::error::{Error, Result};
use crate::path::pather::join_elems;
use crate::path::providers::HomeDirLookup;

/// Extension of plugin manifests and install receipts.
pub const MANIFEST_EXTENSION: &str = ".yaml";
/// Default base directory name under the user's home.
pub const DEFAULT_ROOT_DIR: &str = ".devctl";

const CONFIG_DIR: &str = "configs";
const INDEX_DIR: &str = "index";
const SDKS_DIR: &str = "sdks";
const STORE_DIR: &str = "store";
const RECEIPTS_DIR: &str = "receipts";
const BIN_DIR: &str = "bin";

/// Directory layout of installed plugins.
///
/// # Examples
///
/// ```
/// use devctl::path::InstallLayout;
/// use std::path::PathBuf;
///
/// let layout = InstallLayout::new("/opt/devctl");
/// assert_eq!(
///     layout.plugin_version_install_path("kubectl", "1.29.0"),
///     PathBuf::from("/opt/devctl/store/kubectl/1.29.0")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    base: PathBuf,
}

impl InstallLayout {
    /// Use `base` as the root of the layout.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Infer the layout from the environment.
    ///
    /// Uses `DEVCTL_ROOT` when set, `<home>/.devctl` otherwise. Relative
    /// bases are made absolute against the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryNotFound`] if `DEVCTL_ROOT` is unset and
    /// the home directory is unknown, or an I/O error if the current
    /// directory cannot be read.
    pub fn discover(env: &dyn Environment, home: &dyn HomeDirLookup) -> Result<Self> {
        let base = if let Some(from_env) = env.non_empty_var(ROOT_VAR) {
            log::info!("using environment override {ROOT_VAR}={from_env}");
            PathBuf::from(from_env)
        } else {
            home.home_dir()
                .filter(|home| !home.as_os_str().is_empty())
                .ok_or(Error::HomeDirectoryNotFound)?
                .join(DEFAULT_ROOT_DIR)
        };

        let base = if base.is_absolute() {
            base
        } else {
            std::env::current_dir()?.join(base)
        };

        Ok(Self::new(base))
    }

    /// The base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `{base}/configs/{elems}`
    #[must_use]
    pub fn config(&self, elems: &[&str]) -> PathBuf {
        self.join(CONFIG_DIR, elems)
    }

    /// `{base}/sdks/{elems}`
    #[must_use]
    pub fn sdk(&self, elems: &[&str]) -> PathBuf {
        self.join(SDKS_DIR, elems)
    }

    /// `{base}/store/{elems}`
    #[must_use]
    pub fn store(&self, elems: &[&str]) -> PathBuf {
        self.join(STORE_DIR, elems)
    }

    /// `{base}/bin/{elems}`
    #[must_use]
    pub fn bin(&self, elems: &[&str]) -> PathBuf {
        self.join(BIN_DIR, elems)
    }

    /// `{base}/{elems}`
    #[must_use]
    pub fn subdir(&self, elems: &[&str]) -> PathBuf {
        self.join("", elems)
    }

    /// Directory all plugin indexes are cloned into.
    #[must_use]
    pub fn index_base(&self) -> PathBuf {
        self.base.join(INDEX_DIR)
    }

    /// Directory a plugin index repository is cloned into, e.g.
    /// `{base}/index/default`.
    #[must_use]
    pub fn index_path(&self, name: &str) -> PathBuf {
        join_elems(self.index_base(), &[name])
    }

    /// Plugins directory of an index repository.
    #[must_use]
    pub fn index_plugins_path(&self, name: &str) -> PathBuf {
        self.index_path(name).join("plugins")
    }

    /// Manifest of `plugin` inside the `index` repository.
    #[must_use]
    pub fn index_plugin_manifest_path(&self, index: &str, plugin: &str) -> PathBuf {
        self.index_plugins_path(index)
            .join(format!("{plugin}{MANIFEST_EXTENSION}"))
    }

    /// Directory install receipts are stored in.
    #[must_use]
    pub fn install_receipts_path(&self) -> PathBuf {
        self.base.join(RECEIPTS_DIR)
    }

    /// Directory of plugin executable links; belongs on `$PATH`.
    #[must_use]
    pub fn bin_path(&self) -> PathBuf {
        self.base.join(BIN_DIR)
    }

    /// Base directory for plugin installations.
    #[must_use]
    pub fn install_path(&self) -> PathBuf {
        self.base.join(STORE_DIR)
    }

    /// `{base}/store/{plugin}`
    #[must_use]
    pub fn plugin_install_path(&self, plugin: &str) -> PathBuf {
        self.install_path().join(plugin)
    }

    /// `{base}/receipts/{plugin}.yaml`
    #[must_use]
    pub fn plugin_install_receipt_path(&self, plugin: &str) -> PathBuf {
        self.install_receipts_path()
            .join(format!("{plugin}{MANIFEST_EXTENSION}"))
    }

    /// `{base}/store/{plugin}/{version}`
    #[must_use]
    pub fn plugin_version_install_path(&self, plugin: &str, version: &str) -> PathBuf {
        self.install_path().join(plugin).join(version)
    }

    fn join(&self, dir: &str, elems: &[&str]) -> PathBuf {
        join_elems(join_elems(self.base.clone(), &[dir]), elems)
    }
}
