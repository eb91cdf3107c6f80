//! Stored rule records.
//!
//! These mirror what TuiView saves: the comparison, display mode and stretch
//! mode are raw integer codes, so a record can carry a code that has no
//! label. [`StoredRule::into_rule`] performs the checked lookups.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "rules": [
//!     { "comp": 2, "value": 3, "ctband": null,
//!       "stretch": { "mode": 3, "stretchmode": 1, "stretchparam": null, "bands": [1, 2, 3] } }
//!   ]
//! }
//! ```
//!
//! Keys TuiView keeps for its own rendering (ramps, no-data colors) are
//! ignored.

use gcv_core::{Comparison, DisplayMode, Numeric, RuleError, Stretch, StretchMode, StretchRule};
use serde::{Deserialize, Serialize};

/// Root of the settings file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    /// Saved rules. `None` when the user never saved any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<StoredRule>>,
}

/// One saved rule with coded fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredRule {
    /// Comparison code (`0` less, `1` greater, `2` equal).
    pub comp: i64,
    /// Threshold.
    pub value: Numeric,
    /// Classification band, `null` when unused.
    #[serde(default)]
    pub ctband: Option<u32>,
    /// Display configuration.
    pub stretch: StoredStretch,
}

/// Saved display configuration with coded fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredStretch {
    /// Display mode code (`1` color table, `2` greyscale, `3` RGB).
    pub mode: i64,
    /// Stretch mode code (`1` none, `2` linear, `3` stddev, `4` histogram).
    pub stretchmode: i64,
    /// Stretch parameters, `null` when unused.
    #[serde(default)]
    pub stretchparam: Option<Vec<Numeric>>,
    /// Display bands.
    #[serde(default)]
    pub bands: Vec<u32>,
}

impl StoredRule {
    /// Map the coded fields to a typed rule.
    ///
    /// Fails on the first code without a label, checking comparison, then
    /// display mode, then stretch mode.
    pub fn into_rule(self) -> Result<StretchRule, RuleError> {
        Ok(StretchRule {
            comparison: Comparison::try_from(self.comp)?,
            value: self.value,
            classification_band: self.ctband,
            stretch: self.stretch.into_stretch()?,
        })
    }
}

impl StoredStretch {
    /// Map the coded fields to a typed stretch.
    pub fn into_stretch(self) -> Result<Stretch, RuleError> {
        Ok(Stretch {
            display_mode: DisplayMode::try_from(self.mode)?,
            stretch_mode: StretchMode::try_from(self.stretchmode)?,
            stretch_parameters: self.stretchparam,
            bands: self.bands,
        })
    }
}

impl From<&StretchRule> for StoredRule {
    fn from(rule: &StretchRule) -> Self {
        Self {
            comp: rule.comparison.code(),
            value: rule.value,
            ctband: rule.classification_band,
            stretch: StoredStretch {
                mode: rule.stretch.display_mode.code(),
                stretchmode: rule.stretch.stretch_mode.code(),
                stretchparam: rule.stretch.stretch_parameters.clone(),
                bands: rule.stretch.bands.clone(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gcv_core::{RuleField, default_rules};

    fn stored(comp: i64, mode: i64, stretchmode: i64) -> StoredRule {
        StoredRule {
            comp,
            value: Numeric::Integer(1),
            ctband: None,
            stretch: StoredStretch {
                mode,
                stretchmode,
                stretchparam: None,
                bands: vec![1],
            },
        }
    }

    #[test]
    fn into_rule_maps_codes() {
        let rule = stored(1, 3, 4).into_rule().unwrap();
        assert_eq!(rule.comparison, Comparison::Greater);
        assert_eq!(rule.stretch.display_mode, DisplayMode::Rgb);
        assert_eq!(rule.stretch.stretch_mode, StretchMode::Histogram);
    }

    #[test]
    fn unmapped_comparison_fails() {
        let err = stored(7, 1, 1).into_rule().unwrap_err();
        assert_eq!(
            err,
            RuleError::UnmappedCode {
                field: RuleField::Comparison,
                code: 7
            }
        );
    }

    #[test]
    fn pseudocolor_mode_fails() {
        let err = stored(0, 4, 1).into_rule().unwrap_err();
        assert!(matches!(
            err,
            RuleError::UnmappedCode {
                field: RuleField::DisplayMode,
                code: 4
            }
        ));
    }

    #[test]
    fn unmapped_stretch_mode_fails() {
        let err = stored(0, 1, 0).into_rule().unwrap_err();
        assert!(matches!(
            err,
            RuleError::UnmappedCode {
                field: RuleField::StretchMode,
                ..
            }
        ));
    }

    #[test]
    fn comparison_checked_before_modes() {
        let err = stored(9, 9, 9).into_rule().unwrap_err();
        assert!(matches!(
            err,
            RuleError::UnmappedCode {
                field: RuleField::Comparison,
                ..
            }
        ));
    }

    #[test]
    fn deserialize_tuiview_record() {
        let json = r#"{
            "comp": 0, "value": 6, "ctband": null,
            "stretch": {"mode": 3, "stretchmode": 3, "stretchparam": [2.0],
                        "bands": [4, 3, 2], "rampName": null, "nodata_rgba": [0, 0, 0, 0]}
        }"#;
        let record: StoredRule = serde_json::from_str(json).unwrap();
        let rule = record.into_rule().unwrap();
        assert_eq!(rule.to_string(), "less,6,-1,rgb,stddev,2.0,4|3|2");
    }

    #[test]
    fn missing_optional_keys_default() {
        let json = r#"{"comp": 2, "value": 1, "stretch": {"mode": 2, "stretchmode": 1}}"#;
        let record: StoredRule = serde_json::from_str(json).unwrap();
        assert_eq!(record.ctband, None);
        assert_eq!(record.stretch.stretchparam, None);
        assert!(record.stretch.bands.is_empty());
    }

    #[test]
    fn typed_rules_convert_back_and_forth() {
        for rule in default_rules() {
            let record = StoredRule::from(&rule);
            assert_eq!(record.into_rule().unwrap(), rule);
        }
    }

    #[test]
    fn document_without_rules() {
        let doc: SettingsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.rules.is_none());
        let doc: SettingsDocument = serde_json::from_str(r#"{"rules": null}"#).unwrap();
        assert!(doc.rules.is_none());
        let doc: SettingsDocument = serde_json::from_str(r#"{"rules": []}"#).unwrap();
        assert_eq!(doc.rules, Some(vec![]));
    }
}
