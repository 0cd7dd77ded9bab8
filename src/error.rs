//! Crate-wide error taxonomy.
//!
//! Every variant is a deterministic state-conflict or input-rejection error
//! with a stable machine-readable code. Nothing here is transient or
//! retryable; the HTTP layer maps each variant to a fixed status code.

use thiserror::Error as ThisError;

/// Errors surfaced by the stopwatch engine and the clock lookup.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Start was requested while the stopwatch was already running.
    #[error("stopwatch is already running")]
    AlreadyRunning,

    /// Stop was requested while the stopwatch was already stopped.
    #[error("stopwatch is already stopped")]
    AlreadyStopped,

    /// Lap was requested while the stopwatch was not running.
    #[error("stopwatch is not running")]
    NotRunning,

    /// Reset was requested while the stopwatch was running.
    #[error("cannot reset a running stopwatch")]
    CannotResetWhileRunning,

    /// The requested timezone key is not in the allow-list.
    #[error("timezone {0:?} is not supported")]
    InvalidTimezone(String),
}

impl Error {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::AlreadyRunning => "ALREADY_RUNNING",
            Error::AlreadyStopped => "ALREADY_STOPPED",
            Error::NotRunning => "NOT_RUNNING",
            Error::CannotResetWhileRunning => "CANNOT_RESET_WHILE_RUNNING",
            Error::InvalidTimezone(_) => "INVALID_TIMEZONE",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        // These codes are part of the wire contract.
        assert_eq!(Error::AlreadyRunning.code(), "ALREADY_RUNNING");
        assert_eq!(Error::AlreadyStopped.code(), "ALREADY_STOPPED");
        assert_eq!(Error::NotRunning.code(), "NOT_RUNNING");
        assert_eq!(
            Error::CannotResetWhileRunning.code(),
            "CANNOT_RESET_WHILE_RUNNING"
        );
        assert_eq!(
            Error::InvalidTimezone("Mars/Phobos".into()).code(),
            "INVALID_TIMEZONE"
        );
    }
}
