//! Reading the `gdalcacaview` config file (`~/.gcv`).
//!
//! The file is a list of `Key=Value` lines. `Driver` names the preferred GDAL
//! driver and every `Rule` line adds a stretch rule. Other keys and lines
//! without a key or value are skipped. A file with no rules means the
//! built-in defaults apply.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::constants::{CONFIG_FILE_NAME, DRIVER_KEY, RULE_KEY};
use crate::defaults::default_rules;
use crate::errors::ConfigError;
use crate::rule::StretchRule;

/// Resolve the path to the viewer config (`~/.gcv`).
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    config_path_for_home(Path::new(&home))
}

/// Viewer config path under a specific home directory.
#[must_use]
pub fn config_path_for_home(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

/// Parsed contents of a viewer config file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GcvConfig {
    /// Preferred GDAL driver, if configured.
    pub driver: Option<String>,
    /// Configured rules, in file order.
    pub rules: Vec<StretchRule>,
}

impl GcvConfig {
    /// Parse config text. The first invalid `Rule=` line aborts parsing.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (idx, line) in text.lines().enumerate() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                continue;
            }
            match key {
                DRIVER_KEY => config.driver = Some(value.to_string()),
                RULE_KEY => {
                    let rule = value
                        .parse()
                        .map_err(|source| ConfigError::InvalidRule {
                            line: idx + 1,
                            source,
                        })?;
                    config.rules.push(rule);
                }
                _ => trace!(key, "ignoring config key"),
            }
        }
        Ok(config)
    }

    /// Load a config file. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "viewer config not found");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config = Self::parse(&text)?;
        debug!(?path, rules = config.rules.len(), "loaded viewer config");
        Ok(config)
    }

    /// The rules the viewer applies: configured ones, else the defaults.
    #[must_use]
    pub fn effective_rules(&self) -> Vec<StretchRule> {
        if self.rules.is_empty() {
            default_rules()
        } else {
            self.rules.clone()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
