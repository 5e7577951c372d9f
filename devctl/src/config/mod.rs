//! Configuration of the devctl CLI.
//!
//! The configuration lives in `config.yaml` under the configuration root
//! resolved by [`Pather`](crate::path::Pather).
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Environment variables (`DEVCTL_DEFAULT_INDEX_URI`, `DEVCTL_ENV`)
//! 2. The configuration file
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```yaml
//! index:
//!   name: default
//!   uri: https://github.com/alex-held/devctl-index.git
//! environment: staging
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, IndexConfig, DEFAULT_INDEX_NAME, DEFAULT_INDEX_URI};
pub use validator::ConfigValidator;
