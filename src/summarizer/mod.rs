// file: src/summarizer/mod.rs
// description: function summarization seam and error-to-description conversion
// reference: internal module structure

pub mod openai;

pub use openai::OpenAiClient;

use crate::error::{PipelineError, Result};
use async_trait::async_trait;

/// Produces a natural-language description of a code snippet.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, snippet: &str) -> Result<String>;
}

/// Text placed in the description column when summarization fails.
pub fn describe_failure(err: &PipelineError) -> String {
    match err {
        PipelineError::InvalidRequest(message) => format!("Invalid request error: {}", message),
        other => format!("An error occurred: {}", other),
    }
}
