//! YAML Export functionality
//!
//! Human-readable export of a report.

use serde::Serialize;
use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::export::json::ExportEnvelope;

/// Export a report to YAML, preceded by a comment header
pub fn export_yaml<T, W>(report: &T, mut writer: W) -> SplitResult<()>
where
    T: Serialize,
    W: Write,
{
    let envelope = ExportEnvelope::new(report);

    let header = format!(
        "# splitbill report export\n# Generated: {}\n# App Version: {}\n\n",
        envelope.exported_at, envelope.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| SplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &envelope)?;

    Ok(())
}
