//! # gcv-convert
//!
//! Converts the saved TuiView default stretch rules into lines for the
//! `gdalcacaview` config file (`~/.gcv`). The `convert-tuiview-stretch`
//! binary prints them to stdout, ready to be appended to that file.

#![deny(unsafe_code)]

pub mod export;

pub use export::{ExportError, ExportSummary, export_rules};
