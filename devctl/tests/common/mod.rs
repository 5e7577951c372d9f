//! Common test utilities for integration tests.

use std::env;
use std::path::PathBuf;

use devctl::env::MapEnv;
use devctl::path::{FixedHomeDir, Pather};
use devctl::system::{Os, StaticRuntimeInfo};

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`; the process
/// environment is global.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// A pather with fully injected environment, platform and home directory.
#[allow(dead_code)]
pub fn isolated_pather(prefix: &str, env: MapEnv, os: Os, home: &str) -> Pather {
    Pather::builder()
        .with_app_prefix(prefix)
        .with_environment(env)
        .with_runtime_info(StaticRuntimeInfo::os(os))
        .with_home_lookup(FixedHomeDir(Some(PathBuf::from(home))))
        .build()
}
