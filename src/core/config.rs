//! Gateway settings and credential lookup.

use super::http::HttpClientConfig;
use crate::provider::{Provider, constants::github_models};

/// Tutoring persona sent as the system message. `{context}` is replaced with
/// the lesson topic.
pub const DEFAULT_PERSONA_TEMPLATE: &str = "You are an enthusiastic and helpful SQL Tutor for a coding bootcamp.
The student is currently working on a lesson about: {context}.

Your goals:
1. Help them debug their SQL queries.
2. Explain concepts like SELECT, WHERE, COUNT, SUM, GROUP BY.
3. If they ask for the answer to a challenge, guide them with hints first, don't just give the code immediately unless they seem very stuck.
4. Keep responses concise and formatted with Markdown.
5. Assume they are using PostgreSQL (Supabase).";

pub const DEFAULT_CONTEXT: &str = "General SQL";

const CONTEXT_PLACEHOLDER: &str = "{context}";

/// Source of the bearer credential, consulted on every call.
pub trait CredentialProvider: Send + Sync {
    /// Returns `None` when no usable credential is configured.
    fn credential(&self) -> Option<String>;
}

/// Reads the credential from an environment variable. Empty values count as unset.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(Provider::GitHubModels.default_api_key_env_var())
    }
}

impl CredentialProvider for EnvCredential {
    fn credential(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|value| !value.is_empty())
    }
}

/// Fixed credential, mostly useful in tests and embedded setups.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredential {
    fn credential(&self) -> Option<String> {
        self.0.clone().filter(|value| !value.is_empty())
    }
}

/// Settings for the tutoring gateway.
#[derive(Debug, Clone)]
pub struct TutorSettings {
    /// System persona with a `{context}` placeholder
    pub persona_template: String,
    /// Lesson label used when the caller passes no context
    pub default_context: String,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    /// Environment variable holding the credential (default: `GITHUB_TOKEN`)
    pub credential_env_var: String,
    pub http: HttpClientConfig,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            persona_template: DEFAULT_PERSONA_TEMPLATE.to_string(),
            default_context: DEFAULT_CONTEXT.to_string(),
            model: github_models::DEFAULT_MODEL.to_string(),
            max_tokens: github_models::DEFAULT_MAX_TOKENS,
            base_url: github_models::API_BASE.to_string(),
            credential_env_var: Provider::GitHubModels.default_api_key_env_var().to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

impl TutorSettings {
    pub fn with_persona_template(mut self, template: impl Into<String>) -> Self {
        self.persona_template = template.into();
        self
    }

    pub fn with_default_context(mut self, context: impl Into<String>) -> Self {
        self.default_context = context.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_credential_env_var(mut self, var: impl Into<String>) -> Self {
        self.credential_env_var = var.into();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http = config;
        self
    }

    /// Renders the persona for a lesson topic, falling back to `default_context`.
    pub fn system_prompt(&self, context: Option<&str>) -> String {
        let context = context.unwrap_or(self.default_context.as_str());
        self.persona_template.replace(CONTEXT_PLACEHOLDER, context)
    }
}
