// file: src/summarizer/openai.rs
// description: OpenAI chat completions client for function summaries
// reference: https://platform.openai.com/docs/api-reference/chat

use crate::config::LlmConfig;
use crate::error::{PipelineError, Result};
use crate::summarizer::Summarizer;
use crate::utils::Validator;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

pub struct OpenAiClient {
    client: Client,
    config: LlmConfig,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        Validator::validate_url(&config.api_url)?;

        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'))
    }

    fn user_prompt(&self, snippet: &str) -> String {
        format!("{}:\n\n{}", self.config.instruction, snippet)
    }

    fn failure_from_status(status: StatusCode, body: &str) -> PipelineError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => PipelineError::InvalidRequest(message),
            _ => PipelineError::Summarization(format!(
                "OpenAI API request failed with status {}: {}",
                status, message
            )),
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiClient {
    async fn summarize(&self, snippet: &str) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            PipelineError::Summarization(
                "No API key provided. Set OPENAI_API_KEY in the environment".to_string(),
            )
        })?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.config.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: self.user_prompt(snippet),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            "Requesting summary from {} for {} chars",
            self.config.model,
            snippet.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                PipelineError::Summarization(format!("Failed to send OpenAI API request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::failure_from_status(status, &error_text));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            PipelineError::Summarization(format!("Failed to parse OpenAI API response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                PipelineError::Summarization("No choices returned from OpenAI API".to_string())
            })?
            .message
            .content
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::describe_failure;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server, api_key: Option<&str>) -> OpenAiClient {
        OpenAiClient::new(LlmConfig {
            api_url: format!("{}/v1", server.url()),
            api_key: api_key.map(str::to_string),
            ..LlmConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_returns_trimmed_content() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({
                    "model": "gpt-3.5-turbo",
                    "max_tokens": 150
                })),
                Matcher::Regex("You are a Python code analyzer.".to_string()),
                Matcher::Regex(r"brief description:\\n\\ndef load\(path\):".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  Loads a file.\n"}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let summary = client.summarize("def load(path):").await.unwrap();

        assert_eq!(summary, "Loads a file.");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_bad_request_is_invalid_request() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"max_tokens is too large","type":"invalid_request_error"}}"#)
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let err = client.summarize("def f():").await.unwrap_err();

        assert_eq!(
            describe_failure(&err),
            "Invalid request error: max_tokens is too large"
        );
    }

    #[tokio::test]
    async fn test_server_error_is_generic_failure() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        let err = client.summarize("def f():").await.unwrap_err();
        let description = describe_failure(&err);

        assert!(description.starts_with("An error occurred:"));
        assert!(description.contains("500"));
        assert!(description.contains("upstream exploded"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = client_for(&server, Some("sk-test"));
        assert!(client.summarize("def f():").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, None);
        assert!(!client.has_api_key());

        let err = client.summarize("def f():").await.unwrap_err();
        assert!(describe_failure(&err).contains("OPENAI_API_KEY"));
        m.assert_async().await;
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = OpenAiClient::new(LlmConfig {
            api_url: "https://api.openai.com/v1/".to_string(),
            ..LlmConfig::default()
        })
        .unwrap();
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
