// file: src/repository/local.rs
// description: Filesystem-backed repository source for local checkouts
// reference: https://docs.rs/walkdir

use crate::error::{PipelineError, Result};
use crate::repository::source::{EntryKind, RepoEntry, RepositorySource};
use crate::utils::Validator;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct LocalSource;

impl LocalSource {
    pub fn new() -> Self {
        Self
    }

    fn resolve(repository: &str, path: &str) -> Result<PathBuf> {
        let root = Path::new(repository);
        Validator::validate_directory(root)
            .map_err(|e| PipelineError::repository(repository, e.to_string()))?;

        if path.is_empty() {
            Ok(root.to_path_buf())
        } else {
            Ok(root.join(path))
        }
    }
}

#[async_trait]
impl RepositorySource for LocalSource {
    async fn list_dir(&self, repository: &str, path: &str) -> Result<Vec<RepoEntry>> {
        let root = Path::new(repository);
        let dir = Self::resolve(repository, path)?;
        let mut entries = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| PipelineError::repository(repository, e.to_string()))?;
            let file_type = entry.file_type();

            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            let size = match kind {
                EntryKind::File => entry.metadata().map(|m| m.len()).unwrap_or(0),
                _ => 0,
            };

            let relative_path = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .to_string();

            entries.push(RepoEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: Validator::sanitize_file_path(&relative_path),
                kind,
                size,
            });
        }

        debug!("Listed {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }

    async fn read_file(&self, repository: &str, path: &str) -> Result<String> {
        let full_path = Self::resolve(repository, path)?;

        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| PipelineError::FileOperation {
                path: full_path,
                source,
            })
    }
}
