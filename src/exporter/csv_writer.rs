// file: src/exporter/csv_writer.rs
// description: csv export of function records
// reference: https://docs.rs/csv

use crate::error::{PipelineError, Result};
use crate::models::{COLUMN_HEADERS, FunctionRecord};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The header row is always written, even for an empty run.
    pub fn write(&self, records: &[FunctionRecord]) -> Result<usize> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PipelineError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(&self.path).map_err(|source| PipelineError::FileOperation {
            path: self.path.clone(),
            source,
        })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(COLUMN_HEADERS)?;
        for record in records {
            writer.write_record(record.as_row())?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {}", records.len(), self.path.display());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_run_writes_headers() {
        let temp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp.path().join("functions_summary.csv"));

        let written = exporter.write(&[]).unwrap();

        assert_eq!(written, 0);
        assert_eq!(
            fs::read_to_string(exporter.path()).unwrap(),
            "Repository,Function Name,Description\n"
        );
    }

    #[test]
    fn test_rows_are_quoted() {
        let temp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp.path().join("out.csv"));
        let records = vec![
            FunctionRecord::new("octo/demo", "load", "Loads a file, returns \"data\"."),
            FunctionRecord::new("octo/demo", "save", "Line one\nLine two"),
        ];

        exporter.write(&records).unwrap();

        assert_eq!(
            fs::read_to_string(exporter.path()).unwrap(),
            "Repository,Function Name,Description\n\
             octo/demo,load,\"Loads a file, returns \"\"data\"\".\"\n\
             octo/demo,save,\"Line one\nLine two\"\n"
        );
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();

        CsvExporter::new(&path).write(&[]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Repository,Function Name,Description\n"
        );
    }

    #[test]
    fn test_parent_directories_are_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports/2024/out.csv");

        CsvExporter::new(&path).write(&[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        let records = vec![FunctionRecord::new("octo/demo", "load", "Loads, parses.")];

        CsvExporter::new(&path).write(&records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<FunctionRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(parsed, records);
    }
}
