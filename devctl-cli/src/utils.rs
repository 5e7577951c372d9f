//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across CLI commands: the global
//! options and construction of the command [`Factory`].

use devctl::{Factory, Logger};

use crate::error::CliError;

/// Name of the installed binary.
pub const BIN_NAME: &str = "devctl";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Register `logger` as the global `log` backend.
///
/// Returns `false`, and notes it through `logger` at debug level, when a
/// backend was already installed.
pub fn install_logger(logger: Logger) -> bool {
    match logger.install() {
        Ok(()) => true,
        Err(e) => {
            logger.debug(&format!("logger not installed: {e}"));
            false
        }
    }
}

/// Build the factory commands run against: system streams, the OS
/// filesystem, the default path resolver and the discovered install layout.
pub fn build_factory(logger: Logger) -> Result<Factory, CliError> {
    Ok(Factory::builder().with_logger(logger).build()?)
}
