//! Process exit codes.
//!
//! Exit codes follow the POSIX convention of `0` for success and small
//! positive integers for distinct failure classes.

use std::fmt;

use thiserror::Error;

/// Exit code reported by the `devctl` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    /// Success.
    Ok,
    /// Issues were found; also the default error exit code.
    IssuesFound,
    /// A check finished with warnings.
    WarningInTest,
    /// The operation failed.
    Failure,
    /// The operation timed out.
    Timeout,
    /// There were no source files to work on.
    NoSourceFiles,
    /// No configuration file was found.
    NoConfigFileDetected,
    /// An error was already logged; exit without printing it again.
    ErrorWasLogged,
}

impl ExitCode {
    /// Numeric process exit status.
    ///
    /// # Examples
    ///
    /// ```
    /// use devctl::exit::ExitCode;
    ///
    /// assert_eq!(ExitCode::Ok.code(), 0);
    /// assert_eq!(ExitCode::Failure.code(), 3);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::IssuesFound => 1,
            Self::WarningInTest => 2,
            Self::Failure => 3,
            Self::Timeout => 4,
            Self::NoSourceFiles => 5,
            Self::NoConfigFileDetected => 6,
            Self::ErrorWasLogged => 7,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

/// An error carrying the exit code the process should terminate with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExitError {
    /// Exit code to terminate with.
    pub code: ExitCode,
    /// Message shown to the user.
    pub message: String,
}

impl ExitError {
    /// Create a new exit error.
    #[must_use]
    pub fn new(code: ExitCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Numeric process exit status of this error.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code.code()
    }

    /// Nothing to work on.
    #[must_use]
    pub fn no_source_files() -> Self {
        Self::new(ExitCode::NoSourceFiles, "no source files to analyze")
    }

    /// Generic failure.
    #[must_use]
    pub fn failure() -> Self {
        Self::new(ExitCode::Failure, "failed to analyze")
    }
}
