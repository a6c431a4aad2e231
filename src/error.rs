//! Error types for precheck operations.
//!
//! This module defines [`PrecheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Note that a step exiting non-zero is not an error here: it is a normal
//! pipeline outcome, reported through the runner's outcome type. Errors are
//! reserved for the runner itself failing (e.g. the shell cannot be spawned).

use thiserror::Error;

/// Core error type for precheck operations.
#[derive(Debug, Error)]
pub enum PrecheckError {
    /// A command could not be started at all.
    #[error("Failed to start command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on a running command failed.
    #[error("Failed to wait for command: {command}")]
    CommandWait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for precheck operations.
pub type Result<T> = std::result::Result<T, PrecheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_spawn_displays_command() {
        let err = PrecheckError::CommandSpawn {
            command: "./run_all_tests".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no shell"),
        };
        assert!(err.to_string().contains("./run_all_tests"));
    }

    #[test]
    fn command_wait_displays_command() {
        let err = PrecheckError::CommandWait {
            command: "./check_formatting".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "interrupted"),
        };
        assert!(err.to_string().contains("./check_formatting"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PrecheckError = io_err.into();
        assert!(matches!(err, PrecheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PrecheckError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "test",
            )))
        }
        assert!(returns_error().is_err());
    }
}
