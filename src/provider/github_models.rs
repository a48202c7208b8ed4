//! GitHub Models chat-completions provider.
//!
//! The service speaks the OpenAI chat-completions dialect. Only
//! `choices[].message.content` is decoded, so extra or partial fields such as
//! `usage` never turn a valid reply into a parse failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ChatCompletions;
use crate::core::{ChatRole, HttpClient, HttpClientConfig, LlmError, Message};
use crate::provider::constants::github_models;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMessageRole {
    System,
    User,
    Assistant,
}

impl From<ChatRole> for RequestMessageRole {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::System => RequestMessageRole::System,
            ChatRole::User => RequestMessageRole::User,
            ChatRole::Assistant => RequestMessageRole::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMessage {
    pub role: RequestMessageRole,
    pub content: String,
}

impl From<&Message> for RequestMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.into(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<RequestMessage>,
    pub model: String,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn new(messages: &[Message], model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            messages: messages.iter().map(RequestMessage::from).collect(),
            model: model.into(),
            max_tokens,
        }
    }
}

/// Only the reply text is read; every other field of the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the model produced any text.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Connection settings for the GitHub Models endpoint
#[derive(Debug, Clone)]
pub struct GitHubModelsConfig {
    pub base_url: String,
    pub http_config: HttpClientConfig,
}

impl Default for GitHubModelsConfig {
    fn default() -> Self {
        Self {
            base_url: github_models::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
        }
    }
}

impl GitHubModelsConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            github_models::CHAT_COMPLETIONS_ENDPOINT
        )
    }
}

pub struct GitHubModelsClient {
    config: GitHubModelsConfig,
    http: HttpClient,
}

impl GitHubModelsClient {
    pub fn new(config: GitHubModelsConfig) -> Result<Self, LlmError> {
        let http = HttpClient::new(config.http_config.clone(), None)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GitHubModelsConfig {
        &self.config
    }
}

#[async_trait]
impl ChatCompletions for GitHubModelsClient {
    #[tracing::instrument(
        name = "github_models_chat_completion",
        skip(self, api_key, request),
        fields(
            base_url = %self.config.base_url,
            model = %request.model,
            messages = request.messages.len()
        )
    )]
    async fn create(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let headers = vec![
            ("Authorization".to_string(), format!("Bearer {api_key}")),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];

        self.http
            .post_json(&self.config.url(), &headers, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_wire_shape() {
        let messages = vec![Message::system("persona"), Message::user("hi")];
        let request = ChatCompletionRequest::new(&messages, "gpt-4o-mini", 1000);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "messages": [
                    { "role": "system", "content": "persona" },
                    { "role": "user", "content": "hi" }
                ],
                "model": "gpt-4o-mini",
                "max_tokens": 1000
            })
        );
    }

    #[test]
    fn first_content_reads_first_choice_only() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "first" } },
                { "index": 1, "message": { "role": "assistant", "content": "second" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.first_content(), Some("first"));
    }

    #[test]
    fn unread_fields_do_not_break_parsing() {
        for usage in [
            json!({ "total_tokens": 12 }),
            json!(null),
            json!("n/a"),
            json!({ "prompt_tokens": -1, "completion_tokens": "many" }),
        ] {
            let response: ChatCompletionResponse = serde_json::from_value(json!({
                "choices": [{
                    "index": "zero",
                    "message": { "role": null, "content": "SELECT 1;", "tool_calls": null },
                    "finish_reason": 7
                }],
                "usage": usage
            }))
            .unwrap();

            assert_eq!(response.first_content(), Some("SELECT 1;"), "usage: {usage}");
        }
    }

    #[test]
    fn missing_pieces_yield_no_content() {
        for body in [
            json!({}),
            json!({ "choices": [] }),
            json!({ "choices": [{}] }),
            json!({ "choices": [{ "message": {} }] }),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "" } }] }),
        ] {
            let response: ChatCompletionResponse = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(response.first_content(), None, "body: {body}");
        }
    }

    #[test]
    fn url_joins_base_and_endpoint() {
        let config = GitHubModelsConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.url(), "http://localhost:8080/chat/completions");
        assert_eq!(
            GitHubModelsConfig::default().url(),
            "https://models.inference.ai.azure.com/chat/completions"
        );
    }
}
