// file: src/repository/scanner.rs
// description: Candidate file selection for repository traversal
// reference: suffix, skip-pattern and size filtering

use crate::config::ExtractionConfig;
use crate::repository::source::{EntryKind, RepoEntry};
use tracing::{debug, warn};

pub struct FileScanner {
    config: ExtractionConfig,
}

impl FileScanner {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Whether a listed entry should be read and scanned for definitions.
    pub fn is_candidate(&self, entry: &RepoEntry) -> bool {
        if entry.kind != EntryKind::File {
            if entry.kind == EntryKind::Other {
                debug!("Skipping non-file entry: {}", entry.path);
            }
            return false;
        }

        if !entry.name.ends_with(&self.config.file_suffix) {
            return false;
        }

        if self.should_skip(&entry.path) {
            debug!("Skipping file: {}", entry.path);
            return false;
        }

        let max_size = (self.config.max_file_size_mb as u64) * 1024 * 1024;
        if max_size > 0 && entry.size > max_size {
            warn!(
                "Skipping {}: {} bytes exceeds the {} MB limit",
                entry.path,
                entry.size,
                self.config.max_file_size_mb
            );
            return false;
        }

        true
    }

    /// Whether a directory should be descended into.
    pub fn should_descend(&self, entry: &RepoEntry) -> bool {
        entry.kind == EntryKind::Dir && !self.should_skip(&entry.path)
    }

    /// `*suffix` matches the end of the path, `prefix*` and plain patterns
    /// match anywhere in it.
    fn should_skip(&self, path: &str) -> bool {
        self.config.skip_patterns.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix('*') {
                path.ends_with(suffix)
            } else if let Some(prefix) = pattern.strip_suffix('*') {
                path.contains(prefix)
            } else {
                path.contains(pattern.as_str())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(skip_patterns: Vec<&str>, max_file_size_mb: usize) -> FileScanner {
        FileScanner::new(ExtractionConfig {
            skip_patterns: skip_patterns.into_iter().map(str::to_string).collect(),
            max_file_size_mb,
            ..ExtractionConfig::default()
        })
    }

    #[test]
    fn test_suffix_filter() {
        let scanner = scanner(vec![], 10);

        assert!(scanner.is_candidate(&RepoEntry::file("app.py", 10)));
        assert!(scanner.is_candidate(&RepoEntry::file("pkg/util.py", 10)));
        assert!(!scanner.is_candidate(&RepoEntry::file("README.md", 10)));
        assert!(!scanner.is_candidate(&RepoEntry::file("app.pyc", 10)));
        assert!(!scanner.is_candidate(&RepoEntry::dir("lib.py")));
    }

    #[test]
    fn test_other_entries_are_never_candidates() {
        let scanner = scanner(vec![], 10);
        let entry = RepoEntry {
            name: "link.py".to_string(),
            path: "link.py".to_string(),
            kind: EntryKind::Other,
            size: 0,
        };

        assert!(!scanner.is_candidate(&entry));
        assert!(!scanner.should_descend(&entry));
    }

    #[test]
    fn test_skip_patterns() {
        let scanner = scanner(vec!["*_test.py", "venv/", "build/*"], 10);

        assert!(!scanner.is_candidate(&RepoEntry::file("app_test.py", 1)));
        assert!(!scanner.is_candidate(&RepoEntry::file("venv/lib/site.py", 1)));
        assert!(!scanner.is_candidate(&RepoEntry::file("build/lib/gen.py", 1)));
        assert!(scanner.is_candidate(&RepoEntry::file("app.py", 1)));
        assert!(scanner.should_descend(&RepoEntry::dir("src")));
    }

    #[test]
    fn test_size_limit() {
        let scanner = scanner(vec![], 1);
        assert!(!scanner.is_candidate(&RepoEntry::file("big.py", 2 * 1024 * 1024)));
        assert!(scanner.is_candidate(&RepoEntry::file("small.py", 1024)));

        let unlimited = self::scanner(vec![], 0);
        assert!(unlimited.is_candidate(&RepoEntry::file("big.py", 2 * 1024 * 1024)));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let scanner = scanner(vec![], 1);
        assert!(scanner.is_candidate(&RepoEntry::file("edge.py", 1024 * 1024)));
        assert!(!scanner.is_candidate(&RepoEntry::file("edge.py", 1024 * 1024 + 1)));
    }
}
