//! Application prefix normalization.

use std::fmt;

/// Reverse-DNS namespace that cache directories live under.
const CACHE_NAMESPACE_ROOT: &str = "io.alexheld";

/// The normalized application prefix: one leading dot, lower-cased.
///
/// # Examples
///
/// ```
/// use devctl::path::AppPrefix;
///
/// assert_eq!(AppPrefix::new("devctl").as_str(), ".devctl");
/// assert_eq!(AppPrefix::new("..DEVCTL").as_str(), ".devctl");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppPrefix(String);

impl AppPrefix {
    /// Normalize `name` into a prefix.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(normalize_prefix(name.as_ref()))
    }

    /// The normalized prefix, including its leading dot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache namespace segment, e.g. `io.alexheld.devctl`.
    ///
    /// # Examples
    ///
    /// ```
    /// use devctl::path::AppPrefix;
    ///
    /// assert_eq!(AppPrefix::new("test_devctl").cache_namespace(), "io.alexheld.test_devctl");
    /// ```
    #[must_use]
    pub fn cache_namespace(&self) -> String {
        format!("{CACHE_NAMESPACE_ROOT}{}", self.0)
    }
}

impl fmt::Display for AppPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip all leading dots, lower-case, and prepend exactly one dot.
///
/// Idempotent: normalizing an already-normalized prefix is a no-op.
///
/// # Examples
///
/// ```
/// use devctl::path::normalize_prefix;
///
/// assert_eq!(normalize_prefix("devctl"), ".devctl");
/// assert_eq!(normalize_prefix(".devctl"), ".devctl");
/// assert_eq!(normalize_prefix(&normalize_prefix("DevCtl")), ".devctl");
/// ```
#[must_use]
pub fn normalize_prefix(name: &str) -> String {
    format!(".{}", name.trim_start_matches('.').to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants_agree() {
        for input in ["devctl", ".devctl", "..devctl", "DEVCTL", "...DevCtl"] {
            assert_eq!(normalize_prefix(input), ".devctl", "input: {input}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_prefix("..Test_Devctl");
        assert_eq!(normalize_prefix(&once), once);
    }

    #[test]
    fn test_normalize_keeps_inner_dots() {
        assert_eq!(normalize_prefix("my.app"), ".my.app");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_prefix(""), ".");
        assert_eq!(normalize_prefix("..."), ".");
    }

    #[test]
    fn test_cache_namespace() {
        assert_eq!(
            AppPrefix::new(".test_devctl").cache_namespace(),
            "io.alexheld.test_devctl"
        );
        assert_eq!(AppPrefix::new("devctl").to_string(), ".devctl");
    }
}
