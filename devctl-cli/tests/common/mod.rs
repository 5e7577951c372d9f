//! Common test utilities for CLI integration tests.
//!
//! Every command runs with its own home, configuration, cache and install
//! directories, so tests never touch the real user environment and can run
//! in parallel.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated devctl directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Fake user home
    pub home: PathBuf,
    /// Value of `DEVCTL_CONFIG_HOME`
    pub config_home: PathBuf,
    /// Value of `DEVCTL_CACHE_HOME`
    pub cache_home: PathBuf,
    /// Value of `DEVCTL_ROOT`
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// None of the directories exist yet; `devctl init` creates them.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = temp_dir.path().to_path_buf();

        Self {
            home: base.join("home"),
            config_home: base.join("config"),
            cache_home: base.join("cache"),
            root: base.join("root"),
            temp_dir,
        }
    }

    /// A command with only the isolated home set.
    ///
    /// Use this to exercise the platform fallbacks.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("devctl").expect("Failed to find devctl binary");
        cmd.env("HOME", &self.home)
            .env_remove("DEVCTL_CONFIG_HOME")
            .env_remove("DEVCTL_CACHE_HOME")
            .env_remove("DEVCTL_ROOT")
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("XDG_CACHE_HOME")
            .env_remove("DEVCTL_LOG_MODE")
            .env_remove("DEVCTL_ENV")
            .env_remove("DEVCTL_DEFAULT_INDEX_URI");
        cmd
    }

    /// A command with every devctl directory pointed into the sandbox.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("DEVCTL_CONFIG_HOME", &self.config_home)
            .env("DEVCTL_CACHE_HOME", &self.cache_home)
            .env("DEVCTL_ROOT", &self.root);
        cmd
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.config_home.join("config.yaml")
    }

    /// Write `contents` to the configuration file, creating its directory.
    pub fn write_config(&self, contents: &str) -> &Path {
        std::fs::create_dir_all(&self.config_home).expect("Failed to create config dir");
        std::fs::write(self.config_file(), contents).expect("Failed to write config");
        &self.config_home
    }

    /// Run a successful command and return its stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run devctl");

        assert!(
            output.status.success(),
            "devctl {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
