//! Choosing the rule a viewer applies to a raster.
//!
//! Rules are tried in order and the first match wins. A rule matches when
//! the raster's band count satisfies its comparison. A rule that names a
//! classification band within range additionally requires, when that band
//! is thematic, a color table with red, green, blue and alpha columns.

use tracing::trace;

use crate::rule::StretchRule;

/// What rule selection needs to know about a raster.
pub trait RasterLayout {
    /// Number of bands.
    fn band_count(&self) -> u32;

    /// Whether the 1-based `band` holds thematic (classified) data.
    fn is_thematic(&self, band: u32) -> bool;

    /// Whether the 1-based `band` has an attribute table with red, green,
    /// blue and alpha columns.
    fn has_rgba_color_table(&self, band: u32) -> bool;
}

/// First rule that matches `raster`, if any.
pub fn select_rule<'a, R>(rules: &'a [StretchRule], raster: &R) -> Option<&'a StretchRule>
where
    R: RasterLayout + ?Sized,
{
    let band_count = raster.band_count();
    rules.iter().enumerate().find_map(|(index, rule)| {
        let matched = rule_matches(rule, band_count, raster);
        trace!(index, band_count, matched, "evaluated stretch rule");
        matched.then_some(rule)
    })
}

fn rule_matches<R>(rule: &StretchRule, band_count: u32, raster: &R) -> bool
where
    R: RasterLayout + ?Sized,
{
    if !rule.matches_band_count(band_count) {
        return false;
    }
    match rule.classification_band {
        Some(band) if (1..=band_count).contains(&band) && raster.is_thematic(band) => {
            raster.has_rgba_color_table(band)
        }
        _ => true,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
