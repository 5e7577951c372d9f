//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors, and the helpers that turn an error into the text printed
//! on stderr and the process exit code.

use std::fmt;
use std::io::Write;

use devctl::{Error as LibError, ExitCode, ExitError};

/// Exit code used for errors that carry no code of their own.
pub const DEFAULT_ERROR_EXIT_CODE: i32 = 1;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// An error that carries its own exit code.
    Exit(ExitError),

    /// Several errors reported together.
    Aggregate(Vec<CliError>),

    /// Invalid command-line usage; the message already includes the help hint.
    Usage(String),

    /// I/O error.
    Io(std::io::Error),

    /// Output could not be serialized.
    Serialization(String),

    /// Stop without printing anything.
    Silent,
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 1: Default for any error without a more specific code
    /// - 3: The platform has no directory convention
    /// - Errors built from an [`ExitError`] use its code
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Exit(e) => e.code(),
            CliError::Library(e) if e.is_unsupported_platform() => ExitCode::Failure.into(),
            CliError::Aggregate(errs) if errs.len() == 1 => errs[0].exit_code(),
            _ => DEFAULT_ERROR_EXIT_CODE,
        }
    }

    /// Collapse an aggregate holding exactly one error into that error.
    #[must_use]
    pub fn flatten(self) -> Self {
        match self {
            CliError::Aggregate(mut errs) if errs.len() == 1 => errs.remove(0).flatten(),
            other => other,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Exit(e) => write!(f, "{e}"),
            CliError::Aggregate(errs) => {
                let messages: Vec<String> = errs.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", messages.join(", "))
            }
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Serialization(msg) => write!(f, "failed to serialize output: {msg}"),
            CliError::Silent => Ok(()),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Exit(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<ExitError> for CliError {
    fn from(e: ExitError) -> Self {
        CliError::Exit(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

/// Build a usage error pointing the user at the command's help.
pub fn usage_error(command_path: &str, msg: impl fmt::Display) -> CliError {
    CliError::Usage(format!(
        "{msg}\nSee '{command_path} -h' for help and examples"
    ))
}

/// Prefix `err`'s message with `error: ` unless it already starts with it.
pub fn standard_error_message(err: &dyn fmt::Display) -> String {
    let msg = err.to_string();
    if msg.starts_with("error: ") {
        msg
    } else {
        format!("error: {msg}")
    }
}

/// One standard error message per line, each preceded by `prefix`.
pub fn multiple_errors<E: fmt::Display>(prefix: &str, errs: &[E]) -> String {
    errs.iter()
        .map(|err| format!("{prefix}{}\n", standard_error_message(err)))
        .collect()
}

/// Write `msg` to `out`, adding a trailing newline when missing, and return
/// `code` for the caller to exit with. Nothing is written for an empty
/// message.
pub fn fatal(msg: &str, code: i32, out: &mut dyn Write) -> i32 {
    if !msg.is_empty() {
        let result = if msg.ends_with('\n') {
            write!(out, "{msg}")
        } else {
            writeln!(out, "{msg}")
        };
        if let Err(e) = result {
            log::debug!("failed to report error: {e}");
        }
    }
    code
}

/// Report `err` on `out` the way the CLI prints errors and return the exit
/// code.
pub fn report(err: CliError, out: &mut dyn Write) -> i32 {
    let err = err.flatten();
    let code = err.exit_code();
    match &err {
        CliError::Silent => fatal("", DEFAULT_ERROR_EXIT_CODE, out),
        CliError::Aggregate(errs) => fatal(&multiple_errors("", errs), code, out),
        other => fatal(&standard_error_message(other), code, out),
    }
}
