#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # devctl
//!
//! Path resolution and CLI scaffolding for the devctl plugin manager.
//!
//! This library decides where devctl keeps its configuration, binaries,
//! downloads, SDKs, plugins and caches, and provides the small pieces every
//! devctl command shares: exit codes, logging, a filesystem abstraction and
//! decorative banners for generated scripts.
//!
//! ## Core Types
//!
//! - [`Pather`]: Resolves the configuration root and cache directories
//! - [`InstallLayout`]: Locations of plugin indexes, receipts and installs
//! - [`ExitCode`] and [`ExitError`]: Process exit codes
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use devctl::Pather;
//! use std::path::PathBuf;
//!
//! let pather = Pather::builder()
//!     .with_app_prefix("devctl")
//!     .with_config_root_fn(|| PathBuf::from("/etc/devctl"))
//!     .with_cache_path_fn(|| PathBuf::from("/var/cache"))
//!     .build();
//!
//! assert_eq!(pather.sdk(&["go", "1.22"]).unwrap(), PathBuf::from("/etc/devctl/sdks/go/1.22"));
//! assert_eq!(pather.cache(&["index"]), PathBuf::from("/var/cache/io.alexheld.devctl/index"));
//! ```

pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod exit;
pub mod fs;
pub mod logging;
pub mod output;
pub mod path;
pub mod system;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader};
pub use context::{Factory, FactoryBuilder, IoStreams, PluginContext};
pub use error::{Error, Result};
pub use exit::{ExitCode, ExitError};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{generate_banner, OutputKind};
pub use path::{InstallLayout, Pather, PatherBuilder};
pub use system::{Os, RuntimeInfo};
