//! Stretch rules and their code tables.
//!
//! Each coded field is a closed enum. Codes are TuiView's viewer constants;
//! tokens are the labels written to `gdalcacaview` config lines. Converting
//! an unknown code is a checked [`RuleError::UnmappedCode`].

use crate::errors::{RuleError, RuleField};
use crate::numeric::Numeric;

/// How a rule's threshold is compared against a raster's band count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Band count is less than the threshold.
    Less = 0,
    /// Band count is greater than the threshold.
    Greater = 1,
    /// Band count equals the threshold.
    Equal = 2,
}

impl Comparison {
    /// All comparisons, in code order.
    pub const ALL: [Self; 3] = [Self::Less, Self::Greater, Self::Equal];

    /// Settings-store code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Config-line label.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Greater => "greater",
            Self::Equal => "equal",
        }
    }

    /// Look up a config-line label (exact match).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    /// Whether `lhs <op> rhs` holds.
    #[must_use]
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Less => lhs < rhs,
            Self::Greater => lhs > rhs,
            #[allow(clippy::float_cmp)]
            Self::Equal => lhs == rhs,
        }
    }
}

impl TryFrom<i64> for Comparison {
    type Error = RuleError;

    fn try_from(code: i64) -> Result<Self, RuleError> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(RuleError::UnmappedCode {
                field: RuleField::Comparison,
                code,
            })
    }
}

/// How pixels are turned into screen colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Palette lookup through the band's color table.
    ColorTable = 1,
    /// Single band rendered as grey levels.
    Greyscale = 2,
    /// Three bands composed as red, green, blue.
    Rgb = 3,
}

impl DisplayMode {
    /// All display modes, in code order.
    pub const ALL: [Self; 3] = [Self::ColorTable, Self::Greyscale, Self::Rgb];

    /// Settings-store code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Config-line label.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::ColorTable => "colortable",
            Self::Greyscale => "greyscale",
            Self::Rgb => "rgb",
        }
    }

    /// Look up a config-line label (exact match).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.token() == token)
    }
}

impl TryFrom<i64> for DisplayMode {
    type Error = RuleError;

    fn try_from(code: i64) -> Result<Self, RuleError> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(RuleError::UnmappedCode {
                field: RuleField::DisplayMode,
                code,
            })
    }
}

/// Statistical mapping from raw values to display intensities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StretchMode {
    /// Values are shown as stored (color tables, pre-stretched data).
    None = 1,
    /// Linear min/max stretch.
    Linear = 2,
    /// Mean plus or minus N standard deviations.
    StandardDeviation = 3,
    /// Histogram equalization.
    Histogram = 4,
}

impl StretchMode {
    /// All stretch modes, in code order.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Linear,
        Self::StandardDeviation,
        Self::Histogram,
    ];

    /// Settings-store code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Config-line label.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Linear => "linear",
            Self::StandardDeviation => "stddev",
            Self::Histogram => "histogram",
        }
    }

    /// Look up a config-line label (exact match).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.token() == token)
    }
}

impl TryFrom<i64> for StretchMode {
    type Error = RuleError;

    fn try_from(code: i64) -> Result<Self, RuleError> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(RuleError::UnmappedCode {
                field: RuleField::StretchMode,
                code,
            })
    }
}

/// Display configuration applied when a rule matches.
#[derive(Clone, Debug, PartialEq)]
pub struct Stretch {
    /// Color table, greyscale, or RGB.
    pub display_mode: DisplayMode,
    /// How raw values are stretched.
    pub stretch_mode: StretchMode,
    /// Mode-specific parameters (e.g. the number of standard deviations).
    pub stretch_parameters: Option<Vec<Numeric>>,
    /// 1-based band indices used for display.
    pub bands: Vec<u32>,
}

impl Stretch {
    /// A stretch without parameters.
    #[must_use]
    pub fn new(display_mode: DisplayMode, stretch_mode: StretchMode, bands: Vec<u32>) -> Self {
        Self {
            display_mode,
            stretch_mode,
            stretch_parameters: None,
            bands,
        }
    }

    /// Attach stretch parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<Numeric>) -> Self {
        self.stretch_parameters = Some(parameters);
        self
    }
}

/// A condition on the band count paired with the stretch to apply.
#[derive(Clone, Debug, PartialEq)]
pub struct StretchRule {
    /// How `value` is compared against the band count.
    pub comparison: Comparison,
    /// Threshold.
    pub value: Numeric,
    /// Band checked for a thematic RGBA color table, if any.
    pub classification_band: Option<u32>,
    /// What to display when the rule matches.
    pub stretch: Stretch,
}

impl StretchRule {
    /// A rule with no classification band.
    #[must_use]
    pub fn new(comparison: Comparison, value: impl Into<Numeric>, stretch: Stretch) -> Self {
        Self {
            comparison,
            value: value.into(),
            classification_band: None,
            stretch,
        }
    }

    /// Set the classification band.
    #[must_use]
    pub fn with_classification_band(mut self, band: u32) -> Self {
        self.classification_band = Some(band);
        self
    }

    /// Whether the band-count condition alone holds.
    #[must_use]
    pub fn matches_band_count(&self, band_count: u32) -> bool {
        self.comparison
            .holds(f64::from(band_count), self.value.as_f64())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
