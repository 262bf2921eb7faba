//! Error types for image-release.
//!
//! Only problems the tool cannot safely guess past are represented here:
//! corrupt version files, unreadable configuration and filesystem failures.
//! Git failures are also expressed as [`ReleaseError`] values, but the
//! release pipeline downgrades them to [`crate::git::BestEffort`] outcomes.

use std::{path::PathBuf, process::ExitStatus};
use thiserror::Error;

/// Main error type for image-release operations.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Version errors
    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration in {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Filesystem errors
    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Git errors
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid version error
    pub fn invalid_version(
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidVersion {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
