//! Filesystem locations used by devctl.
//!
//! # Key Concepts
//!
//! ## App prefix
//!
//! Every directory is namespaced by the application prefix, normalized to a
//! single leading dot and lower case (`"DEVCTL"` becomes `".devctl"`).
//!
//! ## Pather
//!
//! [`Pather`] resolves the configuration root and the cache directory with a
//! fixed precedence: injected overrides first, then environment variables,
//! then the platform convention. Every call recomputes its result.
//!
//! ## Install layout
//!
//! [`InstallLayout`] describes where plugin indexes, install receipts and
//! installed plugin versions live below `DEVCTL_ROOT` (default `~/.devctl`).
//!
//! # Examples
//!
//! ```
//! use devctl::env::MapEnv;
//! use devctl::path::Pather;
//! use devctl::system::{Os, StaticRuntimeInfo};
//! use std::path::PathBuf;
//!
//! let pather = Pather::builder()
//!     .with_app_prefix("test_devctl")
//!     .with_environment(MapEnv::new().with("DEVCTL_CONFIG_HOME", "/custom/root"))
//!     .with_runtime_info(StaticRuntimeInfo::os(Os::Linux))
//!     .build();
//!
//! assert_eq!(pather.config_root(&[]).unwrap(), PathBuf::from("/custom/root"));
//! assert_eq!(pather.sdk(&["go"]).unwrap(), PathBuf::from("/custom/root/sdks/go"));
//! ```

mod layout;
mod pather;
mod prefix;
mod providers;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use layout::{InstallLayout, DEFAULT_ROOT_DIR, MANIFEST_EXTENSION};
pub use pather::{
    cache_charts_file, cache_index_file, Pather, PatherBuilder, DEFAULT_APP_PREFIX,
    DEFAULT_CONFIG_FILE,
};
pub use prefix::{normalize_prefix, AppPrefix};
pub use providers::{
    CacheRootProvider, ConfigRootProvider, FixedHomeDir, HomeDirLookup, HomeProvider,
    SystemHomeDir,
};
