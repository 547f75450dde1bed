//! Error types for podloop operations.
//!
//! Every failure path in this tool maps to process exit 1; the variants exist
//! so tests and callers can tell the paths apart, not for recovery.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PodloopError {
    /// A required environment variable is absent.
    #[error("env var {name} not set")]
    MissingVariable { name: String },

    /// The variable is present but not a non-negative base-10 integer.
    #[error("env var {name} is not a digit")]
    MalformedVariable { name: String },

    /// The first argument does not match any registered command.
    #[error("no command: {name}")]
    UnknownCommand { name: String },

    /// No arguments were supplied at all.
    #[error("no command: none given")]
    NoCommand,
}

impl PodloopError {
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub fn malformed_variable(name: impl Into<String>) -> Self {
        Self::MalformedVariable { name: name.into() }
    }
}
