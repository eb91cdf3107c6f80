//! Error types for rule conversion and config parsing.

use std::fmt;

use thiserror::Error;

/// Field of a rule, named in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleField {
    /// How the threshold is compared against the band count.
    Comparison,
    /// Numeric threshold.
    Value,
    /// Optional classification band.
    ClassificationBand,
    /// Color table, greyscale, or RGB.
    DisplayMode,
    /// None, linear, standard deviation, or histogram.
    StretchMode,
    /// `|`-separated stretch parameters.
    StretchParameters,
    /// `|`-separated display bands.
    Bands,
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comparison => "comparison",
            Self::Value => "value",
            Self::ClassificationBand => "classification band",
            Self::DisplayMode => "display mode",
            Self::StretchMode => "stretch mode",
            Self::StretchParameters => "stretch parameters",
            Self::Bands => "bands",
        };
        f.write_str(name)
    }
}

/// A stored rule carried a code outside the known tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// No label exists for this code.
    #[error("unmapped {field} code {code}")]
    UnmappedCode {
        /// Which coded field failed.
        field: RuleField,
        /// The offending code.
        code: i64,
    },
}

/// A rule body could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The body ended before this field.
    #[error("missing {0} in rule string")]
    MissingField(RuleField),
    /// A token matched no known label.
    #[error("unable to understand {field} `{token}`")]
    UnknownToken {
        /// Field the token was read for.
        field: RuleField,
        /// The unrecognized text.
        token: String,
    },
    /// A number or band index did not parse.
    #[error("invalid number `{text}` for {field}")]
    InvalidNumber {
        /// Field the number was read for.
        field: RuleField,
        /// The unparseable text.
        text: String,
    },
}

/// Errors reading a `gdalcacaview` config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// A `Rule=` line did not parse.
    #[error("invalid rule on line {line}: {source}")]
    InvalidRule {
        /// 1-based line number.
        line: usize,
        /// Why the rule was rejected.
        source: ParseError,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
