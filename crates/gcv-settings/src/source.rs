//! The seam between rule export and wherever rules are saved.

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::loader::{load_rules_from_path, resolve_settings_path};
use crate::types::StoredRule;

/// Supplies the user's current default stretch rules.
pub trait RuleSource {
    /// The saved rules in priority order.
    fn current_defaults(&self) -> Result<Vec<StoredRule>>;
}

/// Rules saved in a JSON settings file.
#[derive(Clone, Debug)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Read rules from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read rules from the CLI path, `GCV_STRETCH_SETTINGS`, or the default
    /// location, in that order.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        Self::new(resolve_settings_path(cli_path))
    }

    /// Location this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for SettingsFile {
    fn current_defaults(&self) -> Result<Vec<StoredRule>> {
        load_rules_from_path(&self.path)
    }
}
