//! Configuration schema definitions.
//!
//! This module defines the structure of the CLI's own `config.yaml`.

use serde::{Deserialize, Serialize};

/// Plugin index used when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "default";

/// Repository of the default plugin index.
pub const DEFAULT_INDEX_URI: &str = "https://github.com/alex-held/devctl-index.git";

/// Complete configuration structure.
///
/// Missing fields take their defaults, so an empty file is valid.
///
/// # Examples
///
/// ```
/// use devctl::config::Config;
///
/// let config: Config = serde_yaml::from_str("environment: staging").unwrap();
/// assert_eq!(config.environment.as_deref(), Some("staging"));
/// assert_eq!(config.index.name, "default");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Plugin index settings.
    pub index: IndexConfig,

    /// Deployment environment the CLI runs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// Plugin index settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Name of the index; also its directory name below `index/`.
    pub name: String,

    /// Git URI the index is cloned from.
    pub uri: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_INDEX_NAME.to_string(),
            uri: DEFAULT_INDEX_URI.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.index.name, "default");
        assert_eq!(config.index.uri, DEFAULT_INDEX_URI);
        assert_eq!(config.environment, None);
    }

    #[test]
    fn test_partial_index_keeps_defaults() {
        let config: Config = serde_yaml::from_str("index:\n  name: internal\n").unwrap();
        assert_eq!(config.index.name, "internal");
        assert_eq!(config.index.uri, DEFAULT_INDEX_URI);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("unknown: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_omits_missing_environment() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("index:"));
        assert!(!yaml.contains("environment"));
    }
}
