// file: src/repository/mod.rs
// description: Repository access module exports
// reference: Internal module structure

pub mod github;
pub mod local;
pub mod scanner;
pub mod source;

pub use github::GithubClient;
pub use local::LocalSource;
pub use scanner::FileScanner;
pub use source::{EntryKind, RepoEntry, RepositoryRouter, RepositorySource};
