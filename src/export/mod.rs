//! Export module for splitbill
//!
//! Writes reports to files in several formats:
//! - CSV: flat rows for spreadsheets
//! - JSON: versioned, machine-readable
//! - YAML: versioned, human-readable

pub mod json;
pub mod yaml;

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::error::SplitResult;
use crate::reports::{EventReport, UserBalanceReport};
use crate::storage::write_atomic;

pub use json::{export_json, ExportEnvelope, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// A report that can be written in every export format
pub trait Exportable: Serialize {
    /// Write the report as CSV rows
    fn write_csv<W: Write>(&self, writer: W) -> SplitResult<()>;
}

impl Exportable for EventReport {
    fn write_csv<W: Write>(&self, writer: W) -> SplitResult<()> {
        self.export_csv(writer)
    }
}

impl Exportable for UserBalanceReport {
    fn write_csv<W: Write>(&self, writer: W) -> SplitResult<()> {
        self.export_csv(writer)
    }
}

/// Write a report in the given format
pub fn export_report<R, W>(report: &R, format: ExportFormat, writer: W) -> SplitResult<()>
where
    R: Exportable,
    W: Write,
{
    match format {
        ExportFormat::Csv => report.write_csv(writer),
        ExportFormat::Json => export_json(report, writer, true),
        ExportFormat::Yaml => export_yaml(report, writer),
    }
}

/// Write a report to a file atomically
pub fn export_report_to_file<R: Exportable>(
    report: &R,
    format: ExportFormat,
    path: &Path,
) -> SplitResult<()> {
    write_atomic(path, |writer| export_report(report, format, writer))?;
    tracing::info!(path = %path.display(), ?format, "report exported");
    Ok(())
}
