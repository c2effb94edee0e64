// file: src/exporter/json.rs
// description: json export of function records with a run manifest

use crate::error::{PipelineError, Result};
use crate::models::FunctionRecord;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub generated_at: String,
    pub total_functions: usize,
    pub functions: &'a [FunctionRecord],
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, records: &[FunctionRecord], pretty: bool) -> Result<usize> {
        let manifest = ExportManifest {
            generated_at: Utc::now().to_rfc3339(),
            total_functions: records.len(),
            functions: records,
        };

        let content = if pretty {
            serde_json::to_string_pretty(&manifest)?
        } else {
            serde_json::to_string(&manifest)?
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content).map_err(|source| PipelineError::FileOperation {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Export complete: {} functions written to {}",
            records.len(),
            self.path.display()
        );
        Ok(records.len())
    }
}
