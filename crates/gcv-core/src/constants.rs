//! Keys, separators, and limits of the `gdalcacaview` config format.

/// Config key that introduces a stretch rule.
pub const RULE_KEY: &str = "Rule";

/// Config key naming the preferred GDAL driver.
pub const DRIVER_KEY: &str = "Driver";

/// Separates the seven fields of a rule body.
pub const FIELD_SEPARATOR: char = ',';

/// Separates elements of the stretch-parameter and band lists.
pub const LIST_SEPARATOR: char = '|';

/// Rendered in place of an absent classification band.
pub const NO_CLASSIFICATION_BAND: i64 = -1;

/// Display bands the viewer reads from a rule; extra bands are ignored.
pub const MAX_DISPLAY_BANDS: usize = 3;

/// Stretch parameters the viewer reads from a rule; extra values are ignored.
pub const MAX_STRETCH_PARAMETERS: usize = 2;

/// File name of the viewer config, relative to `$HOME`.
pub const CONFIG_FILE_NAME: &str = ".gcv";
