//! Output and export options shared by CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

use crate::error::{SplitError, SplitResult};
use crate::export::ExportFormat;

/// How results are printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// File export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// CSV rows
    Csv,
    /// Versioned JSON
    Json,
    /// Versioned YAML
    Yaml,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

/// Pick the export format: explicit flag first, then the file extension
pub fn resolve_export_format(
    path: &Path,
    format: Option<ExportFormatArg>,
) -> SplitResult<ExportFormat> {
    match format {
        Some(arg) => Ok(arg.into()),
        None => ExportFormat::from_path(path).ok_or_else(|| {
            SplitError::Validation(format!(
                "Cannot infer export format from '{}'. Use --format csv|json|yaml",
                path.display()
            ))
        }),
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> SplitResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_format_wins() {
        let format = resolve_export_format(Path::new("out.json"), Some(ExportFormatArg::Csv)).unwrap();
        assert_eq!(format, ExportFormat::Csv);
    }

    #[test]
    fn test_format_from_extension() {
        let format = resolve_export_format(Path::new("out.yaml"), None).unwrap();
        assert_eq!(format, ExportFormat::Yaml);
    }

    #[test]
    fn test_unknown_extension() {
        let err = resolve_export_format(Path::new("out.txt"), None).unwrap_err();
        assert!(err.is_validation());
    }
}
