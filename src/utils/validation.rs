// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use crate::extractor::patterns::GITHUB_REPOSITORY;
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Split a GitHub `owner/name` identifier into its two parts.
    pub fn validate_repository_identifier(identifier: &str) -> Result<(String, String)> {
        let captures = GITHUB_REPOSITORY.captures(identifier.trim()).ok_or_else(|| {
            PipelineError::Validation(format!(
                "Invalid repository identifier (expected owner/name): {}",
                identifier
            ))
        })?;

        Ok((captures["owner"].to_string(), captures["name"].to_string()))
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn sanitize_file_path(path: &str) -> String {
        path.replace('\\', "/")
            .replace("//", "/")
            .trim()
            .trim_start_matches('/')
            .to_string()
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((end, _)) => format!("{}...", &text[..end]),
            None => text.to_string(),
        }
    }
}
