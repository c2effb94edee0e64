// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod summarizer;
pub mod utils;

pub use config::{Config, ExtractionConfig, GithubConfig, LlmConfig, OutputConfig, OutputFormat};
pub use error::{PipelineError, Result};
pub use exporter::{CsvExporter, ExportManifest, JsonExporter, export};
pub use extractor::{DefinitionExtractor, FunctionDefinition};
pub use models::{COLUMN_HEADERS, FunctionRecord};
pub use pipeline::{PipelineStats, ProgressTracker, RepositoryFailure, RunReport, SummaryPipeline};
pub use repository::{
    EntryKind, FileScanner, GithubClient, LocalSource, RepoEntry, RepositoryRouter,
    RepositorySource,
};
pub use summarizer::{OpenAiClient, Summarizer, describe_failure};
pub use utils::{ScanTimer, SummaryThroughput, Validator};
