// file: src/repository/github.rs
// description: GitHub contents API client for listing and reading repository files
// reference: https://docs.github.com/en/rest/repos/contents

use crate::config::GithubConfig;
use crate::error::{PipelineError, Result};
use crate::repository::source::{EntryKind, RepoEntry, RepositorySource};
use crate::utils::Validator;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    size: u64,
}

impl From<ContentEntry> for RepoEntry {
    fn from(entry: ContentEntry) -> Self {
        let kind = match entry.kind.as_str() {
            "file" => EntryKind::File,
            "dir" => EntryKind::Dir,
            _ => EntryKind::Other,
        };

        Self {
            name: entry.name,
            path: entry.path,
            kind,
            size: entry.size,
        }
    }
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
    reference: Option<String>,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        Validator::validate_url(&config.api_url)?;

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            reference: config.reference.clone(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn contents_url(&self, repository: &str, path: &str) -> Result<Url> {
        let (owner, name) = Validator::validate_repository_identifier(repository)
            .map_err(|e| PipelineError::repository(repository, e.to_string()))?;

        let mut url = Url::parse(&self.api_url).map_err(|e| {
            PipelineError::Config(format!("Invalid GitHub API URL {}: {}", self.api_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                PipelineError::Config(format!("GitHub API URL cannot be a base: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(["repos", owner.as_str(), name.as_str(), "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        if let Some(reference) = &self.reference {
            url.query_pairs_mut().append_pair("ref", reference);
        }

        Ok(url)
    }

    async fn get(&self, repository: &str, url: Url, accept: &str) -> Result<Response> {
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::repository(
                repository,
                format!("GitHub API request failed with status {}: {}", status, error_text),
            ));
        }

        Ok(response)
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn list_dir(&self, repository: &str, path: &str) -> Result<Vec<RepoEntry>> {
        let url = self.contents_url(repository, path)?;
        let response = self.get(repository, url, JSON_MEDIA_TYPE).await?;

        let entries: Vec<ContentEntry> = response.json().await.map_err(|e| {
            PipelineError::repository(
                repository,
                format!("Unexpected directory listing for '{}': {}", path, e),
            )
        })?;

        debug!("Listed {} entries in {}:{}", entries.len(), repository, path);
        Ok(entries.into_iter().map(RepoEntry::from).collect())
    }

    async fn read_file(&self, repository: &str, path: &str) -> Result<String> {
        let url = self.contents_url(repository, path)?;
        let response = self.get(repository, url, RAW_MEDIA_TYPE).await?;
        let bytes = response.bytes().await?;

        String::from_utf8(bytes.to_vec()).map_err(|e| {
            PipelineError::repository(repository, format!("{} is not valid UTF-8: {}", path, e))
        })
    }
}
