// file: src/repository/source.rs
// description: abstraction over where repository trees are read from
// reference: https://docs.rs/async-trait

use crate::error::Result;
use crate::repository::github::GithubClient;
use crate::repository::local::LocalSource;
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything else that is neither.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    pub name: String,
    /// Slash-separated path relative to the repository root.
    pub path: String,
    pub kind: EntryKind,
    pub size: u64,
}

impl RepoEntry {
    pub fn file(path: &str, size: u64) -> Self {
        Self::new(path, EntryKind::File, size)
    }

    pub fn dir(path: &str) -> Self {
        Self::new(path, EntryKind::Dir, 0)
    }

    fn new(path: &str, kind: EntryKind, size: u64) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            kind,
            size,
        }
    }
}

/// A place repository trees can be listed and read from. Paths are
/// relative to the repository root; the root itself is `""`.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_dir(&self, repository: &str, path: &str) -> Result<Vec<RepoEntry>>;

    async fn read_file(&self, repository: &str, path: &str) -> Result<String>;
}

/// Sends identifiers naming an existing local directory to the filesystem
/// and everything else to GitHub.
pub struct RepositoryRouter {
    github: GithubClient,
    local: LocalSource,
}

impl RepositoryRouter {
    pub fn new(github: GithubClient) -> Self {
        Self {
            github,
            local: LocalSource::new(),
        }
    }

    fn is_local(repository: &str) -> bool {
        Path::new(repository).is_dir()
    }

    fn route(&self, repository: &str) -> &dyn RepositorySource {
        if Self::is_local(repository) {
            debug!("Reading {} from the local filesystem", repository);
            &self.local
        } else {
            &self.github
        }
    }
}

#[async_trait]
impl RepositorySource for RepositoryRouter {
    async fn list_dir(&self, repository: &str, path: &str) -> Result<Vec<RepoEntry>> {
        self.route(repository).list_dir(repository, path).await
    }

    async fn read_file(&self, repository: &str, path: &str) -> Result<String> {
        self.route(repository).read_file(repository, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GithubConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_repo_entry_name_from_path() {
        let entry = RepoEntry::file("src/pkg/util.py", 12);
        assert_eq!(entry.name, "util.py");
        assert_eq!(entry.kind, EntryKind::File);

        let entry = RepoEntry::dir("src");
        assert_eq!(entry.name, "src");
        assert_eq!(entry.size, 0);
    }

    #[tokio::test]
    async fn test_router_reads_local_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.py"), "def main():\n").unwrap();

        let router = RepositoryRouter::new(GithubClient::new(&GithubConfig::default()).unwrap());
        let repository = temp.path().to_string_lossy().to_string();

        let entries = router.list_dir(&repository, "").await.unwrap();
        assert_eq!(entries, vec![RepoEntry::file("app.py", 12)]);

        let content = router.read_file(&repository, "app.py").await.unwrap();
        assert_eq!(content, "def main():\n");
    }

    #[tokio::test]
    async fn test_router_rejects_invalid_remote_identifier() {
        let router = RepositoryRouter::new(GithubClient::new(&GithubConfig::default()).unwrap());
        let result = router.list_dir("definitely-not-a-dir-or-repo", "").await;
        assert!(result.is_err());
    }
}
