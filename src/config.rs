// file: src/config.rs
// description: application configuration management with yaml and environment support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "repos.yaml";
pub const ENV_PREFIX: &str = "FUNC_SUMMARIZE";
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub repositories: Vec<String>,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_url: String,
    /// Branch, tag or commit to read; the default branch when unset.
    pub reference: Option<String>,
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: String,
    pub instruction: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub file_suffix: String,
    pub definition_prefix: String,
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            reference: None,
            token: None,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 150,
            temperature: 0.5,
            system_prompt: "You are a Python code analyzer.".to_string(),
            instruction: "Summarize the following Python function and provide its name, \
                          input parameters, output, and a brief description"
                .to_string(),
            api_key: None,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            file_suffix: ".py".to_string(),
            definition_prefix: "def ".to_string(),
            skip_patterns: vec![],
            max_file_size_mb: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("functions_summary.csv"),
            format: OutputFormat::Csv,
        }
    }
}

impl Config {
    /// Load the repository list from `path`, apply `FUNC_SUMMARIZE_*`
    /// overrides and pick up credentials from the environment (and `.env`).
    pub fn load(path: &Path) -> Result<Self> {
        dotenv().ok();
        Self::load_with_environment(path, None)
    }

    /// `environment` replaces the process environment as the source of
    /// `FUNC_SUMMARIZE_*` overrides when given.
    fn load_with_environment(
        path: &Path,
        environment: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(environment),
            );

        let mut config = Self::build(builder)?;
        config.apply_credentials(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Yaml));

        let config = Self::build(builder)?;
        config.validate()?;
        Ok(config)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Fill in credentials that the configuration file did not set.
    pub fn apply_credentials<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if self.github.token.is_none() {
            self.github.token = non_empty(GITHUB_TOKEN_VAR);
        }
        if self.llm.api_key.is_none() {
            self.llm.api_key = non_empty(OPENAI_API_KEY_VAR);
        }
    }

    /// Command-line values take precedence over the file and environment.
    pub fn apply_overrides(&mut self, output: Option<PathBuf>, format: Option<OutputFormat>) {
        if let Some(output) = output {
            self.output.path = output;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.file_suffix.is_empty() {
            return Err(PipelineError::Config(
                "extraction.file_suffix must not be empty".to_string(),
            ));
        }

        if self.extraction.definition_prefix.is_empty() {
            return Err(PipelineError::Config(
                "extraction.definition_prefix must not be empty".to_string(),
            ));
        }

        if self.llm.model.trim().is_empty() {
            return Err(PipelineError::Config("llm.model must not be empty".to_string()));
        }

        if self.llm.max_tokens == 0 {
            return Err(PipelineError::Config(
                "llm.max_tokens must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(PipelineError::Config(format!(
                "llm.temperature must be between 0 and 2, got {}",
                self.llm.temperature
            )));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(PipelineError::Config("output.path must not be empty".to_string()));
        }

        Ok(())
    }
}
