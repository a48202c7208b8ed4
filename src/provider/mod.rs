pub(crate) mod constants;
pub mod github_models;

use async_trait::async_trait;

use crate::core::LlmError;

pub use github_models::{
    ChatCompletionRequest, ChatCompletionResponse, GitHubModelsClient, GitHubModelsConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    GitHubModels,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::GitHubModels => write!(f, "GitHub Models"),
        }
    }
}

impl Provider {
    /// Get the default environment variable name for this provider's API key
    pub fn default_api_key_env_var(&self) -> &'static str {
        match self {
            Provider::GitHubModels => constants::github_models::API_KEY_ENV_VAR,
        }
    }
}

/// Transport that turns one chat-completions request into one response.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    async fn create(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError>;
}
