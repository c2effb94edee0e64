// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub repositories_processed: usize,
    pub repositories_failed: usize,
    pub files_scanned: usize,
    pub functions_found: usize,
    pub summaries_failed: usize,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories_attempted(&self) -> usize {
        self.repositories_processed + self.repositories_failed
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.repositories_attempted();
        if total == 0 {
            return 0.0;
        }
        (self.repositories_processed as f64 / total as f64) * 100.0
    }

    pub fn summaries_succeeded(&self) -> usize {
        self.functions_found.saturating_sub(self.summaries_failed)
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    repositories_processed: AtomicUsize,
    repositories_failed: AtomicUsize,
    files_scanned: AtomicUsize,
    functions_found: AtomicUsize,
    summaries_failed: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_repositories: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();
        Self::build(multi_progress, total_repositories, colored)
    }

    /// A tracker that counts but never draws.
    pub fn hidden(total_repositories: usize) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        Self::build(multi_progress, total_repositories, false)
    }

    fn build(multi_progress: MultiProgress, total_repositories: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_repositories as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            repositories_processed: AtomicUsize::new(0),
            repositories_failed: AtomicUsize::new(0),
            files_scanned: AtomicUsize::new(0),
            functions_found: AtomicUsize::new(0),
            summaries_failed: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn start_repository(&self, repository: &str) {
        self.main_bar.set_message(repository.to_string());
    }

    pub fn inc_repositories_processed(&self) {
        self.repositories_processed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_repositories_failed(&self) {
        self.repositories_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_files_scanned(&self) {
        self.files_scanned.fetch_add(1, Ordering::SeqCst);
        self.update_detail_bar();
    }

    pub fn add_function(&self, summarized: bool) {
        self.functions_found.fetch_add(1, Ordering::SeqCst);
        if !summarized {
            self.summaries_failed.fetch_add(1, Ordering::SeqCst);
        }
        self.update_detail_bar();
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Processing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            repositories_processed: self.repositories_processed.load(Ordering::SeqCst),
            repositories_failed: self.repositories_failed.load(Ordering::SeqCst),
            files_scanned: self.files_scanned.load(Ordering::SeqCst),
            functions_found: self.functions_found.load(Ordering::SeqCst),
            summaries_failed: self.summaries_failed.load(Ordering::SeqCst),
            duration: self.start_time.elapsed(),
        }
    }

    fn update_detail_bar(&self) {
        let message = format!(
            "Files: {} | Functions: {} | Failed summaries: {} | Failed repositories: {}",
            self.files_scanned.load(Ordering::SeqCst),
            self.functions_found.load(Ordering::SeqCst),
            self.summaries_failed.load(Ordering::SeqCst),
            self.repositories_failed.load(Ordering::SeqCst),
        );

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repositories {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} repositories {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" })),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
