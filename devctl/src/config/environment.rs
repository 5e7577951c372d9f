//! Environment variable handling for configuration overrides.

use crate::config::schema::Config;
use crate::env::{Environment, DEFAULT_INDEX_URI_VAR, ENV_VAR};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```
/// use devctl::config::{Config, EnvironmentConfig};
/// use devctl::env::MapEnv;
///
/// let mut config = Config::default();
/// let env = MapEnv::new().with("DEVCTL_ENV", "ci");
/// EnvironmentConfig::apply_overrides(&mut config, &env);
/// assert_eq!(config.environment.as_deref(), Some("ci"));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `DEVCTL_*` overrides to `config`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides(config: &mut Config, env: &dyn Environment) {
        // DEVCTL_DEFAULT_INDEX_URI
        if let Some(uri) = env.non_empty_var(DEFAULT_INDEX_URI_VAR) {
            log::debug!("index uri overridden by {DEFAULT_INDEX_URI_VAR}");
            config.index.uri = uri;
        }

        // DEVCTL_ENV
        if let Some(environment) = env.non_empty_var(ENV_VAR) {
            config.environment = Some(environment);
        }
    }
}
