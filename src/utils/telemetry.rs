// file: src/utils/telemetry.rs
// description: per-repository scan timing and summary throughput for a run
// reference: https://docs.rs/tracing

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Times the scan of one repository.
pub struct ScanTimer {
    repository: String,
    started: Instant,
}

impl ScanTimer {
    pub fn start(repository: &str) -> Self {
        debug!("Scanning {}", repository);
        Self {
            repository: repository.to_string(),
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Logs how many definitions the repository produced and returns the scan time.
    pub fn done(self, functions: usize) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Scanned {}: {} {} in {:.2}s",
            self.repository,
            functions,
            if functions == 1 { "function" } else { "functions" },
            elapsed.as_secs_f64(),
        );
        elapsed
    }
}

/// Summary rate over a whole run. Summaries are one model call each, so
/// the rate is reported per minute.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryThroughput {
    pub summaries: usize,
    pub failed: usize,
    pub elapsed_ms: u128,
    pub summaries_per_minute: f64,
}

impl SummaryThroughput {
    pub fn measure(summaries: usize, failed: usize, elapsed: Duration) -> Self {
        let minutes = elapsed.as_secs_f64() / 60.0;
        let summaries_per_minute = if minutes > 0.0 {
            summaries as f64 / minutes
        } else {
            0.0
        };

        Self {
            summaries,
            failed,
            elapsed_ms: elapsed.as_millis(),
            summaries_per_minute,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "{} summaries ({} failed) in {:.1}s, {:.1}/min",
            self.summaries,
            self.failed,
            self.elapsed_ms as f64 / 1000.0,
            self.summaries_per_minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_per_minute() {
        let throughput = SummaryThroughput::measure(30, 2, Duration::from_secs(90));
        assert_eq!(throughput.summaries_per_minute, 20.0);
        assert_eq!(throughput.elapsed_ms, 90_000);
        assert_eq!(throughput.describe(), "30 summaries (2 failed) in 90.0s, 20.0/min");
    }

    #[test]
    fn test_throughput_of_empty_run() {
        let throughput = SummaryThroughput::measure(0, 0, Duration::ZERO);
        assert_eq!(throughput.summaries_per_minute, 0.0);
        assert!(throughput.describe().starts_with("0 summaries (0 failed)"));
    }

    #[test]
    fn test_scan_timer_reports_elapsed() {
        let timer = ScanTimer::start("octo/demo");
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.done(3) >= Duration::from_millis(10));
    }
}
