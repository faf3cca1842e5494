//! JSON Export functionality
//!
//! Wraps a report in a versioned envelope so consumers can check
//! compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SplitError, SplitResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEnvelope<T> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The exported report
    pub report: T,
}

impl<T> ExportEnvelope<T> {
    /// Wrap a report
    pub fn new(report: T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }
}

/// Export a report to JSON
pub fn export_json<T, W>(report: &T, writer: W, pretty: bool) -> SplitResult<()>
where
    T: Serialize,
    W: Write,
{
    let envelope = ExportEnvelope::new(report);
    let result = if pretty {
        serde_json::to_writer_pretty(writer, &envelope)
    } else {
        serde_json::to_writer(writer, &envelope)
    };
    result.map_err(|e| SplitError::Export(e.to_string()))
}
