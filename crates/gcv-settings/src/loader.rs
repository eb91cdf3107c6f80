//! Locating and reading the saved stretch rules.
//!
//! Path precedence (highest first):
//! 1. Explicit path from the command line
//! 2. `GCV_STRETCH_SETTINGS` environment variable (non-empty)
//! 3. `~/.tuiview/stretch_defaults.json`
//!
//! A missing file, or a file without a `rules` key, yields TuiView's
//! compiled defaults. Unreadable files and invalid JSON are errors.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gcv_core::default_rules;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::{SettingsDocument, StoredRule};

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "GCV_STRETCH_SETTINGS";

/// Resolve the default settings path (`~/.tuiview/stretch_defaults.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    settings_path_for_home(Path::new(&home))
}

/// Default settings path under a specific home directory.
#[must_use]
pub fn settings_path_for_home(home: &Path) -> PathBuf {
    home.join(".tuiview").join("stretch_defaults.json")
}

/// Resolve the settings path from the CLI value, the environment, and `$HOME`.
pub fn resolve_settings_path(cli_path: Option<PathBuf>) -> PathBuf {
    choose_settings_path(cli_path, read_env_string(SETTINGS_PATH_ENV), settings_path)
}

/// Apply the precedence rules to already-read inputs.
pub fn choose_settings_path(
    cli_path: Option<PathBuf>,
    env_path: Option<String>,
    default_path: impl FnOnce() -> PathBuf,
) -> PathBuf {
    cli_path
        .or_else(|| env_path.map(PathBuf::from))
        .unwrap_or_else(default_path)
}

/// Load the saved rules from a specific path.
pub fn load_rules_from_path(path: &Path) -> Result<Vec<StoredRule>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(?path, "stretch settings not found, using defaults");
            return Ok(default_stored_rules());
        }
        Err(e) => return Err(SettingsError::io(path, e)),
    };
    let document: SettingsDocument =
        serde_json::from_str(&content).map_err(|e| SettingsError::json(path, e))?;
    match document.rules {
        Some(rules) => {
            debug!(?path, count = rules.len(), "loaded stretch rules");
            Ok(rules)
        }
        None => {
            debug!(?path, "no saved stretch rules, using defaults");
            Ok(default_stored_rules())
        }
    }
}

/// TuiView's compiled default rules as stored records.
pub fn default_stored_rules() -> Vec<StoredRule> {
    default_rules().iter().map(StoredRule::from).collect()
}

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
