//! # convert-tuiview-stretch
//!
//! Prints the saved TuiView default stretch rules as `gdalcacaview` config
//! lines, one `Rule=` line per rule, in priority order.

#![deny(unsafe_code)]

use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gcv_convert::export_rules;
use gcv_settings::SettingsFile;

/// Print TuiView default stretch rules as gdalcacaview `Rule=` lines.
#[derive(Parser, Debug)]
#[command(name = "convert-tuiview-stretch", version, about)]
struct Cli {
    /// Settings file to read instead of the TuiView default location.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    gcv_core::logging::init_subscriber("warn");

    let source = SettingsFile::resolve(args.settings);
    tracing::debug!(path = %source.path().display(), "reading stretch settings");

    let stdout = std::io::stdout();
    let summary = export_rules(&source, BufWriter::new(stdout.lock())).with_context(|| {
        format!(
            "Failed to export stretch rules from {}",
            source.path().display()
        )
    })?;

    tracing::info!(
        lines = summary.lines,
        beyond_viewer_limits = summary.beyond_viewer_limits,
        "stretch rules exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_needed() {
        let cli = Cli::try_parse_from(["convert-tuiview-stretch"]).unwrap();
        assert!(cli.settings.is_none());
    }

    #[test]
    fn settings_flag() {
        let cli =
            Cli::try_parse_from(["convert-tuiview-stretch", "--settings", "/tmp/s.json"]).unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("/tmp/s.json")));
    }
}
