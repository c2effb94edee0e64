// file: src/pipeline/orchestrator.rs
// description: walks each configured repository and summarizes matched definitions
// reference: sequential fetch-extract-summarize workflow

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractor::DefinitionExtractor;
use crate::models::FunctionRecord;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::repository::{FileScanner, RepoEntry, RepositorySource};
use crate::summarizer::{Summarizer, describe_failure};
use crate::utils::{ScanTimer, Validator};
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct RepositoryFailure {
    pub repository: String,
    pub error: String,
}

#[derive(Debug)]
pub struct RunReport {
    pub records: Vec<FunctionRecord>,
    pub stats: PipelineStats,
    pub failures: Vec<RepositoryFailure>,
}

pub struct SummaryPipeline<S, M> {
    source: S,
    summarizer: M,
    scanner: FileScanner,
    extractor: DefinitionExtractor,
    show_progress: bool,
    progress_colors: bool,
}

impl<S, M> SummaryPipeline<S, M>
where
    S: RepositorySource,
    M: Summarizer,
{
    pub fn new(source: S, summarizer: M, extraction: ExtractionConfig) -> Self {
        let extractor = DefinitionExtractor::new(extraction.definition_prefix.clone());

        Self {
            source,
            summarizer,
            scanner: FileScanner::new(extraction),
            extractor,
            show_progress: false,
            progress_colors: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.progress_colors = colored;
        self
    }

    /// Process every repository in order. A failing repository is logged
    /// and skipped; rows it produced before failing are kept.
    pub async fn run(&self, repositories: &[String]) -> RunReport {
        info!("Processing {} repositories", repositories.len());

        let progress = if self.show_progress {
            ProgressTracker::with_color(repositories.len(), self.progress_colors)
        } else {
            ProgressTracker::hidden(repositories.len())
        };

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for repository in repositories {
            progress.start_repository(repository);
            let timer = ScanTimer::start(repository);
            let before = records.len();

            match self
                .process_repository(repository, &mut records, &progress)
                .await
            {
                Ok(()) => {
                    progress.inc_repositories_processed();
                    timer.done(records.len() - before);
                }
                Err(e) => {
                    error!("Error processing repository {}: {}", repository, e);
                    progress.inc_repositories_failed();
                    failures.push(RepositoryFailure {
                        repository: repository.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        progress.finish();
        let stats = progress.get_stats();

        RunReport {
            records,
            stats,
            failures,
        }
    }

    /// Breadth-first walk from the repository root: directories go to the
    /// back of the queue, files are handled as they come off the front.
    async fn process_repository(
        &self,
        repository: &str,
        records: &mut Vec<FunctionRecord>,
        progress: &ProgressTracker,
    ) -> Result<()> {
        let mut queue: VecDeque<RepoEntry> = self.source.list_dir(repository, "").await?.into();

        while let Some(entry) = queue.pop_front() {
            if self.scanner.should_descend(&entry) {
                queue.extend(self.source.list_dir(repository, &entry.path).await?);
            } else if self.scanner.is_candidate(&entry) {
                let content = self.source.read_file(repository, &entry.path).await?;
                progress.inc_files_scanned();
                self.summarize_file(repository, &entry, &content, records, progress)
                    .await;
            }
        }

        Ok(())
    }

    async fn summarize_file(
        &self,
        repository: &str,
        entry: &RepoEntry,
        content: &str,
        records: &mut Vec<FunctionRecord>,
        progress: &ProgressTracker,
    ) {
        let definitions = self.extractor.extract(content);
        debug!(
            "{}:{} has {} candidate definitions",
            repository,
            entry.path,
            definitions.len()
        );

        for definition in definitions {
            let (description, summarized) = match self.summarizer.summarize(&definition.line).await {
                Ok(summary) => (summary, true),
                Err(e) => {
                    warn!(
                        "Summary failed for {} ({}:{}): {}",
                        Validator::truncate_text(&definition.line, 60),
                        entry.path,
                        definition.line_number,
                        e
                    );
                    (describe_failure(&e), false)
                }
            };

            progress.add_function(summarized);
            records.push(FunctionRecord::new(repository, definition.name, description));
        }
    }
}
