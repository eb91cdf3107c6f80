//! Writing saved rules as `Rule=` lines.

use std::io::Write;

use gcv_core::constants::{MAX_DISPLAY_BANDS, MAX_STRETCH_PARAMETERS};
use gcv_core::{RuleError, StretchRule};
use gcv_settings::{RuleSource, SettingsError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that stop an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The rule source could not produce the rules.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// A rule carried a code without a label.
    #[error("rule {index}: {source}")]
    Rule {
        /// 0-based position in the loaded sequence.
        index: usize,
        /// The failed lookup.
        source: RuleError,
    },
    /// Writing a line failed.
    #[error("failed to write rule line: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a completed export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// `Rule=` lines written.
    pub lines: usize,
    /// Rules with more bands or stretch parameters than gdalcacaview reads.
    pub beyond_viewer_limits: usize,
}

/// Write one `Rule=` line per rule from `source` to `out`, in source order.
///
/// Each rule is converted before anything is written for it, so a rule with
/// an unmapped code stops the export without a partial line. Lines already
/// written for earlier rules stay written.
pub fn export_rules<S, W>(source: &S, mut out: W) -> Result<ExportSummary, ExportError>
where
    S: RuleSource + ?Sized,
    W: Write,
{
    let stored = source.current_defaults()?;
    debug!(count = stored.len(), "exporting stretch rules");

    let mut summary = ExportSummary::default();
    for (index, record) in stored.into_iter().enumerate() {
        let rule = record
            .into_rule()
            .map_err(|source| ExportError::Rule { index, source })?;
        if warn_on_viewer_limits(index, &rule) {
            summary.beyond_viewer_limits += 1;
        }
        writeln!(out, "{}", rule.config_line())?;
        summary.lines += 1;
    }
    out.flush()?;
    Ok(summary)
}

/// Logs and reports whether the viewer will ignore part of `rule`.
fn warn_on_viewer_limits(index: usize, rule: &StretchRule) -> bool {
    let bands = rule.stretch.bands.len();
    if bands > MAX_DISPLAY_BANDS {
        warn!(
            index,
            bands, "rule has more display bands than gdalcacaview reads"
        );
    }
    let parameters = rule.stretch.stretch_parameters.as_ref().map_or(0, Vec::len);
    if parameters > MAX_STRETCH_PARAMETERS {
        warn!(
            index,
            parameters, "rule has more stretch parameters than gdalcacaview reads"
        );
    }
    bands > MAX_DISPLAY_BANDS || parameters > MAX_STRETCH_PARAMETERS
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
