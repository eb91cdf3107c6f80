//! Built-in stretch rules.
//!
//! TuiView and `gdalcacaview` both fall back to these when the user has not
//! saved any rules of their own. Order is priority order.

use crate::numeric::Numeric;
use crate::rule::{Comparison, DisplayMode, Stretch, StretchMode, StretchRule};

/// The default rules as `gdalcacaview` rule bodies.
pub const DEFAULT_RULE_LINES: [&str; 6] = [
    "equal,1,1,colortable,none,,1",
    "equal,1,-1,greyscale,none,,1",
    "equal,2,-1,greyscale,none,,1",
    "equal,3,-1,rgb,none,,1|2|3",
    "less,6,-1,rgb,stddev,2.0,4|3|2",
    "greater,5,-1,rgb,stddev,2.0,5|4|2",
];

/// Number of standard deviations used by the default multi-band rules.
const DEFAULT_STDDEV_FACTOR: f64 = 2.0;

/// The default rules, in priority order.
pub fn default_rules() -> Vec<StretchRule> {
    use Comparison::{Equal, Greater, Less};
    use DisplayMode::{ColorTable, Greyscale, Rgb};

    let stddev = |bands: Vec<u32>| {
        Stretch::new(Rgb, StretchMode::StandardDeviation, bands)
            .with_parameters(vec![Numeric::Real(DEFAULT_STDDEV_FACTOR)])
    };

    vec![
        // single band with a color table
        StretchRule::new(Equal, 1_i64, Stretch::new(ColorTable, StretchMode::None, vec![1]))
            .with_classification_band(1),
        StretchRule::new(Equal, 1_i64, Stretch::new(Greyscale, StretchMode::None, vec![1])),
        StretchRule::new(Equal, 2_i64, Stretch::new(Greyscale, StretchMode::None, vec![1])),
        StretchRule::new(Equal, 3_i64, Stretch::new(Rgb, StretchMode::None, vec![1, 2, 3])),
        StretchRule::new(Less, 6_i64, stddev(vec![4, 3, 2])),
        StretchRule::new(Greater, 5_i64, stddev(vec![5, 4, 2])),
    ]
}
