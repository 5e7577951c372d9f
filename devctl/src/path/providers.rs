//! Override points for path resolution.
//!
//! Each override is a small trait. Closures returning a `PathBuf` implement
//! the caller-facing ones, so tests can write
//! `with_user_home_fn(|| PathBuf::from("/h/o/m/e/user"))`.

use std::path::PathBuf;

/// Substitute for the user's home directory.
pub trait HomeProvider {
    /// The home directory to resolve configuration paths under.
    fn user_home(&self) -> PathBuf;
}

/// Substitute for the cache base directory.
pub trait CacheRootProvider {
    /// The directory the cache namespace is created in.
    fn cache_root(&self) -> PathBuf;
}

/// Substitute that fully determines the configuration root.
pub trait ConfigRootProvider {
    /// The configuration root itself; no prefix is appended.
    fn config_root(&self) -> PathBuf;
}

impl<F: Fn() -> PathBuf> HomeProvider for F {
    fn user_home(&self) -> PathBuf {
        self()
    }
}

impl<F: Fn() -> PathBuf> CacheRootProvider for F {
    fn cache_root(&self) -> PathBuf {
        self()
    }
}

impl<F: Fn() -> PathBuf> ConfigRootProvider for F {
    fn config_root(&self) -> PathBuf {
        self()
    }
}

/// The operating system's notion of the home directory.
#[cfg_attr(test, mockall::automock)]
pub trait HomeDirLookup {
    /// The home directory, or `None` when the OS cannot tell.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Asks the OS via the `home` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHomeDir;

impl HomeDirLookup for SystemHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// A fixed answer, for tests and embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHomeDir(pub Option<PathBuf>);

impl HomeDirLookup for FixedHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}
