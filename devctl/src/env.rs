//! Environment variable access.
//!
//! Every component that reads the process environment does so through the
//! [`Environment`] trait, so tests can supply variables without touching
//! process-global state.

use std::collections::HashMap;

/// Overrides the configuration root. Used verbatim, without the app prefix.
pub const CONFIG_HOME_ROOT_VAR: &str = "DEVCTL_CONFIG_HOME";
/// Overrides the cache base directory.
pub const CACHE_HOME_VAR: &str = "DEVCTL_CACHE_HOME";
/// XDG base directory for user configuration.
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";
/// XDG base directory for non-essential cached data.
pub const XDG_CACHE_HOME_VAR: &str = "XDG_CACHE_HOME";
/// The user's home directory.
pub const HOME_VAR: &str = "HOME";
/// Overrides the install layout base directory.
pub const ROOT_VAR: &str = "DEVCTL_ROOT";
/// Selects the deployment environment recorded in the configuration.
pub const ENV_VAR: &str = "DEVCTL_ENV";
/// Overrides the default plugin index URI.
pub const DEFAULT_INDEX_URI_VAR: &str = "DEVCTL_DEFAULT_INDEX_URI";
/// Selects the log level (`quiet`, `normal`, `verbose`).
pub const LOG_MODE_VAR: &str = "DEVCTL_LOG_MODE";

/// Read access to environment variables.
pub trait Environment {
    /// Value of `key`, or `None` if the variable is unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty value the same as an unset one.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables.
///
/// # Examples
///
/// ```
/// use devctl::env::{Environment, MapEnv};
///
/// let env = MapEnv::new().with("DEVCTL_CONFIG_HOME", "/custom/root");
/// assert_eq!(env.var("DEVCTL_CONFIG_HOME").as_deref(), Some("/custom/root"));
/// assert_eq!(env.var("HOME"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
