//! Error types for the devctl library.
//!
//! This module provides the error hierarchy shared by path resolution,
//! configuration loading and the filesystem helpers, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a devctl error.
///
/// # Examples
///
/// ```
/// use devctl::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok(".devctl")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the devctl library.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system has no directory convention yet.
    #[error("the current os is not yet supported; os={os}")]
    UnsupportedPlatform {
        /// The offending operating system identifier.
        os: String,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine user home directory")]
    HomeDirectoryNotFound,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An operation needs the OS filesystem but got another backend.
    #[error("{operation} is only supported on the OS filesystem")]
    UnsupportedFilesystem {
        /// The operation that was attempted.
        operation: String,
    },

    /// A symbolic link points to a relative target.
    #[error("symbolic link is relative ({})", path.display())]
    RelativeSymlink {
        /// The relative link target.
        path: PathBuf,
    },
}

impl Error {
    /// Check if error was caused by an unsupported operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use devctl::Error;
    ///
    /// let err = Error::UnsupportedPlatform { os: "windows".to_string() };
    /// assert!(err.is_unsupported_platform());
    /// ```
    #[must_use]
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Self::UnsupportedPlatform { .. })
    }

    /// Check if error indicates a missing file or resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
