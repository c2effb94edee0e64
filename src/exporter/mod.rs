// file: src/exporter/mod.rs
// description: output writers for summarized function records
// reference: internal module structure

pub mod csv_writer;
pub mod json;

pub use csv_writer::CsvExporter;
pub use json::{ExportManifest, JsonExporter};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::FunctionRecord;
use std::path::Path;

/// Write `records` to `path` in the requested format, replacing any
/// existing file. Returns the number of rows written.
pub fn export(format: OutputFormat, path: &Path, records: &[FunctionRecord]) -> Result<usize> {
    match format {
        OutputFormat::Csv => CsvExporter::new(path).write(records),
        OutputFormat::Json => JsonExporter::new(path).write(records, true),
    }
}
