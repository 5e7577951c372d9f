//! Runtime information about the host system.

use std::fmt;

/// Operating system family, as far as directory conventions are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux, using the XDG base directory convention.
    Linux,
    /// macOS.
    Darwin,
    /// Any other operating system, by identifier.
    Other(String),
}

impl Os {
    /// Parse an operating system identifier.
    ///
    /// Accepts both the Go-style `darwin` and Rust's `macos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use devctl::system::Os;
    ///
    /// assert_eq!(Os::from_name("linux"), Os::Linux);
    /// assert_eq!(Os::from_name("macos"), Os::Darwin);
    /// assert_eq!(Os::from_name("windows"), Os::Other("windows".to_string()));
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            other => Self::Other(other.to_string()),
        }
    }

    /// The operating system this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Identifier of this operating system.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system and architecture of the running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Operating system.
    pub os: Os,
    /// CPU architecture, e.g. `x86_64` or `aarch64`.
    pub arch: String,
}

impl RuntimeInfo {
    /// Create runtime info for the given OS and architecture.
    #[must_use]
    pub fn new(os: Os, arch: impl Into<String>) -> Self {
        Self {
            os,
            arch: arch.into(),
        }
    }
}

/// Supplies [`RuntimeInfo`].
#[cfg_attr(test, mockall::automock)]
pub trait RuntimeInfoGetter {
    /// Return the runtime information.
    fn get(&self) -> RuntimeInfo;
}

/// Reports the platform this binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRuntimeInfo;

impl RuntimeInfoGetter for OsRuntimeInfo {
    fn get(&self) -> RuntimeInfo {
        RuntimeInfo::new(Os::current(), std::env::consts::ARCH)
    }
}

/// Reports a fixed platform, regardless of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRuntimeInfo(pub RuntimeInfo);

impl StaticRuntimeInfo {
    /// Pretend to run on `os` with an `x86_64` CPU.
    #[must_use]
    pub fn os(os: Os) -> Self {
        Self(RuntimeInfo::new(os, "x86_64"))
    }
}

impl RuntimeInfoGetter for StaticRuntimeInfo {
    fn get(&self) -> RuntimeInfo {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_from_name_is_case_insensitive() {
        assert_eq!(Os::from_name("Linux"), Os::Linux);
        assert_eq!(Os::from_name("DARWIN"), Os::Darwin);
        assert_eq!(Os::from_name("FreeBSD"), Os::Other("freebsd".to_string()));
    }

    #[test]
    fn test_os_display() {
        assert_eq!(Os::Linux.to_string(), "linux");
        assert_eq!(Os::Darwin.to_string(), "darwin");
        assert_eq!(Os::Other("windows".into()).to_string(), "windows");
    }

    #[test]
    fn test_os_runtime_info_matches_compile_target() {
        let info = OsRuntimeInfo.get();
        assert_eq!(info.os, Os::from_name(std::env::consts::OS));
        assert_eq!(info.arch, std::env::consts::ARCH);
    }

    #[test]
    fn test_static_runtime_info() {
        let getter = StaticRuntimeInfo::os(Os::Darwin);
        assert_eq!(getter.get().os, Os::Darwin);
        assert_eq!(getter.get().arch, "x86_64");
    }

    #[test]
    fn test_mock_runtime_info_getter() {
        let mut mock = MockRuntimeInfoGetter::new();
        mock.expect_get()
            .times(1)
            .returning(|| RuntimeInfo::new(Os::Other("plan9".into()), "mips"));
        assert_eq!(mock.get().os.as_str(), "plan9");
    }
}
