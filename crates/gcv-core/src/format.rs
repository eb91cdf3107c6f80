//! Rendering rules as `gdalcacaview` config lines.
//!
//! A rule body has seven comma-separated fields:
//!
//! ```text
//! comparison,value,classification band,display mode,stretch mode,parameters,bands
//! ```
//!
//! An absent classification band renders as `-1`, absent stretch parameters
//! as an empty field. Parameters and bands are joined with `|`.

use std::fmt;

use crate::constants::{FIELD_SEPARATOR, LIST_SEPARATOR, NO_CLASSIFICATION_BAND, RULE_KEY};
use crate::rule::{Comparison, DisplayMode, StretchMode, StretchRule};

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for StretchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for StretchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = FIELD_SEPARATOR;
        write!(f, "{}{sep}{}{sep}", self.comparison, self.value)?;
        match self.classification_band {
            Some(band) => write!(f, "{band}")?,
            None => write!(f, "{NO_CLASSIFICATION_BAND}")?,
        }
        write!(
            f,
            "{sep}{}{sep}{}{sep}",
            self.stretch.display_mode, self.stretch.stretch_mode
        )?;
        if let Some(parameters) = &self.stretch.stretch_parameters {
            write_joined(f, parameters)?;
        }
        write!(f, "{sep}")?;
        write_joined(f, &self.stretch.bands)
    }
}

impl StretchRule {
    /// The full config line, `Rule=` followed by the rule body.
    #[must_use]
    pub fn config_line(&self) -> String {
        format!("{RULE_KEY}={}", self)
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{LIST_SEPARATOR}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Numeric;
    use crate::rule::Stretch;

    fn rule(
        comparison: Comparison,
        value: Numeric,
        classification_band: Option<u32>,
        display_mode: DisplayMode,
        stretch_mode: StretchMode,
        stretch_parameters: Option<Vec<Numeric>>,
        bands: Vec<u32>,
    ) -> StretchRule {
        StretchRule {
            comparison,
            value,
            classification_band,
            stretch: Stretch {
                display_mode,
                stretch_mode,
                stretch_parameters,
                bands,
            },
        }
    }

    #[test]
    fn rgb_rule_without_parameters() {
        let r = rule(
            Comparison::Equal,
            Numeric::Integer(0),
            None,
            DisplayMode::Rgb,
            StretchMode::None,
            None,
            vec![1, 2, 3],
        );
        assert_eq!(r.config_line(), "Rule=equal,0,-1,rgb,none,,1|2|3");
    }

    #[test]
    fn classified_stddev_rule() {
        let r = rule(
            Comparison::Less,
            Numeric::Real(3.5),
            Some(7),
            DisplayMode::ColorTable,
            StretchMode::StandardDeviation,
            Some(vec![Numeric::Real(2.0)]),
            vec![1],
        );
        assert_eq!(r.config_line(), "Rule=less,3.5,7,colortable,stddev,2.0,1");
    }

    #[test]
    fn greyscale_linear_rule() {
        let r = rule(
            Comparison::Less,
            Numeric::Integer(100),
            None,
            DisplayMode::Greyscale,
            StretchMode::Linear,
            None,
            vec![1],
        );
        assert_eq!(r.config_line(), "Rule=less,100,-1,greyscale,linear,,1");
    }

    #[test]
    fn histogram_rule_with_parameter_list() {
        let r = rule(
            Comparison::Greater,
            Numeric::Integer(50),
            Some(2),
            DisplayMode::ColorTable,
            StretchMode::Histogram,
            Some(vec![
                Numeric::Integer(10),
                Numeric::Integer(20),
                Numeric::Integer(30),
            ]),
            vec![1, 2, 3],
        );
        assert_eq!(
            r.config_line(),
            "Rule=greater,50,2,colortable,histogram,10|20|30,1|2|3"
        );
    }

    #[test]
    fn empty_bands_render_empty_field() {
        let r = rule(
            Comparison::Equal,
            Numeric::Integer(1),
            None,
            DisplayMode::Greyscale,
            StretchMode::None,
            None,
            vec![],
        );
        assert_eq!(r.to_string(), "equal,1,-1,greyscale,none,,");
    }

    #[test]
    fn empty_parameter_list_renders_empty_field() {
        let r = rule(
            Comparison::Equal,
            Numeric::Integer(1),
            Some(0),
            DisplayMode::Greyscale,
            StretchMode::Linear,
            Some(vec![]),
            vec![4],
        );
        assert_eq!(r.to_string(), "equal,1,0,greyscale,linear,,4");
    }

    #[test]
    fn tokens_display() {
        assert_eq!(Comparison::Greater.to_string(), "greater");
        assert_eq!(DisplayMode::ColorTable.to_string(), "colortable");
        assert_eq!(StretchMode::Histogram.to_string(), "histogram");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_numeric() -> impl Strategy<Value = Numeric> {
            prop_oneof![
                any::<i64>().prop_map(Numeric::Integer),
                ((1_u64 << 63)..=u64::MAX).prop_map(Numeric::LargeInteger),
                (-1.0e6f64..1.0e6).prop_map(Numeric::Real),
            ]
        }

        fn arb_rule() -> impl Strategy<Value = StretchRule> {
            (
                proptest::sample::select(Comparison::ALL.to_vec()),
                arb_numeric(),
                proptest::option::of(0u32..64),
                proptest::sample::select(DisplayMode::ALL.to_vec()),
                proptest::sample::select(StretchMode::ALL.to_vec()),
                proptest::option::of(proptest::collection::vec(arb_numeric(), 0..4)),
                proptest::collection::vec(1u32..16, 0..5),
            )
                .prop_map(|(c, v, cb, dm, sm, sp, b)| rule(c, v, cb, dm, sm, sp, b))
        }

        proptest! {
            #[test]
            fn always_seven_fields(r in arb_rule()) {
                let line = r.config_line();
                let body = line.strip_prefix("Rule=").unwrap();
                prop_assert_eq!(body.split(',').count(), 7);
            }

            #[test]
            fn comparison_field_is_token(r in arb_rule()) {
                let line = r.to_string();
                let first = line.split(',').next().unwrap();
                prop_assert_eq!(first, r.comparison.token());
            }

            #[test]
            fn classification_field(r in arb_rule()) {
                let line = r.to_string();
                let field = line.split(',').nth(2).unwrap().to_string();
                let expected = r
                    .classification_band
                    .map_or_else(|| "-1".to_string(), |b| b.to_string());
                prop_assert_eq!(field, expected);
            }

            #[test]
            fn bands_field_is_pipe_join(r in arb_rule()) {
                let line = r.to_string();
                let field = line.split(',').nth(6).unwrap().to_string();
                let expected = r
                    .stretch
                    .bands
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("|");
                prop_assert_eq!(field, expected);
            }

            #[test]
            fn parameters_field(r in arb_rule()) {
                let line = r.to_string();
                let field = line.split(',').nth(5).unwrap().to_string();
                let expected = r.stretch.stretch_parameters.as_ref().map_or_else(
                    String::new,
                    |p| p.iter().map(ToString::to_string).collect::<Vec<_>>().join("|"),
                );
                prop_assert_eq!(field, expected);
            }

            #[test]
            fn body_parses_back(r in arb_rule()) {
                let parsed: StretchRule = r.to_string().parse().unwrap();
                let mut expected = r;
                // an empty parameter list renders like an absent one
                if expected.stretch.stretch_parameters.as_ref().is_some_and(Vec::is_empty) {
                    expected.stretch.stretch_parameters = None;
                }
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
