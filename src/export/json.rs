//! JSON report output.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ExtractError, Result};
use crate::model::report::ReportEntry;

/// Serialize `entries` as a JSON array indented by four spaces.
pub fn write_report_to<W: Write>(mut writer: W, entries: &[ReportEntry]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    entries.serialize(&mut serializer)?;
    writer
        .write_all(b"\n")
        .map_err(|e| ExtractError::Report(serde_json::Error::io(e)))
}

/// Write the report for `entries` to `path`, replacing any previous file.
pub fn write_report(path: &Path, entries: &[ReportEntry]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| ExtractError::io(path, e))?;
    let mut writer = std::io::BufWriter::new(file);
    write_report_to(&mut writer, entries)?;
    writer.flush().map_err(|e| ExtractError::io(path, e))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "Wrote report");
    Ok(())
}
