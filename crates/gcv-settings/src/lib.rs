//! # gcv-settings
//!
//! Loads the user's saved TuiView default stretch rules.
//!
//! Rules come from a JSON settings file (`~/.tuiview/stretch_defaults.json`,
//! overridable by `GCV_STRETCH_SETTINGS` or an explicit path). When nothing
//! has been saved, TuiView's compiled defaults are returned. Records keep
//! TuiView's raw integer codes until [`StoredRule::into_rule`] maps them.
//!
//! Consumers depend on the [`RuleSource`] trait, so tests can supply rules
//! without touching the filesystem.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod source;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    SETTINGS_PATH_ENV, default_stored_rules, load_rules_from_path, resolve_settings_path,
    settings_path,
};
pub use source::{RuleSource, SettingsFile};
pub use types::{SettingsDocument, StoredRule, StoredStretch};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
