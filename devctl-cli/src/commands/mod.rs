//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `paths`: Show the directories devctl uses
//! - `init`: Create the devctl directories and a default configuration
//! - `config`: Show the effective configuration
//! - `banner`: Render a decorative banner
//! - `completions`: Generate shell completion scripts

pub mod banner;
pub mod completions;
pub mod config;
pub mod init;
pub mod paths;

pub use banner::BannerCommand;
pub use completions::CompletionsCommand;
pub use config::ConfigCommand;
pub use init::InitCommand;
pub use paths::{Location, PathsCommand};
