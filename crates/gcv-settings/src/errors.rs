//! Failures reading the saved stretch rules.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The stretch settings file could not be read or parsed.
///
/// Only a `NotFound` read counts as "nothing saved"; the loader answers that
/// with the built-in rules instead of an error.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading the file failed for a reason other than its absence.
    #[error("cannot read stretch settings {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// The file is not a valid stretch settings document.
    #[error("invalid stretch settings JSON in {}: {source}", .path.display())]
    Json {
        /// File that was being parsed.
        path: PathBuf,
        /// Parser failure, with line and column.
        source: serde_json::Error,
    },
}

impl SettingsError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The settings file the failure concerns.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
