//! # gcv-core
//!
//! Stretch-rule vocabulary shared by the TuiView settings loader and the
//! `gdalcacaview` config format.
//!
//! - **Rules**: [`StretchRule`] and [`Stretch`] with closed code tables
//!   ([`Comparison`], [`DisplayMode`], [`StretchMode`])
//! - **Formatting**: `Display` renders the seven-field rule body,
//!   [`StretchRule::config_line`] adds the `Rule=` key
//! - **Parsing**: `FromStr` for rule bodies, [`GcvConfig`] for whole `~/.gcv` files
//! - **Defaults**: the six built-in rules both viewers fall back to
//! - **Selection**: [`select_rule`] picks the rule a viewer applies to a raster
//! - **Errors**: [`RuleError`], [`ParseError`], [`ConfigError`] via `thiserror`

#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod defaults;
pub mod errors;
pub mod format;
pub mod logging;
pub mod numeric;
pub mod parse;
pub mod rule;
pub mod select;

pub use config::{GcvConfig, config_path, config_path_for_home};
pub use defaults::{DEFAULT_RULE_LINES, default_rules};
pub use errors::{ConfigError, ParseError, RuleError, RuleField};
pub use numeric::Numeric;
pub use rule::{Comparison, DisplayMode, Stretch, StretchMode, StretchRule};
pub use select::{RasterLayout, select_rule};
