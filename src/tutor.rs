//! The tutoring gateway: persona + history in, one reply string out.

use std::sync::Arc;

use tracing::error;

use crate::core::{CredentialProvider, EnvCredential, LlmError, Message, TutorSettings};
use crate::provider::{
    ChatCompletionRequest, ChatCompletions, GitHubModelsClient, GitHubModelsConfig, Provider,
};

/// Returned when the model answers without any text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response.";

pub struct TutorGateway {
    settings: TutorSettings,
    credentials: Arc<dyn CredentialProvider>,
    transport: Arc<dyn ChatCompletions>,
}

impl TutorGateway {
    /// Gateway backed by GitHub Models, reading the credential from
    /// `settings.credential_env_var` on every call.
    pub fn new(settings: TutorSettings) -> Result<Self, LlmError> {
        let client = GitHubModelsClient::new(
            GitHubModelsConfig::default()
                .with_base_url(settings.base_url.clone())
                .with_http_config(settings.http.clone()),
        )?;
        let credentials = EnvCredential::new(settings.credential_env_var.clone());

        Ok(Self {
            settings,
            credentials: Arc::new(credentials),
            transport: Arc::new(client),
        })
    }

    pub fn with_credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    pub fn with_transport(mut self, transport: impl ChatCompletions + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn settings(&self) -> &TutorSettings {
        &self.settings
    }

    /// Persona first, then the caller's history in order, then the new user turn.
    pub fn build_messages(
        &self,
        history: &[Message],
        new_message: &str,
        context: Option<&str>,
    ) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(self.settings.system_prompt(context)));
        messages.extend(history.iter().cloned());
        messages.push(Message::user(new_message));
        messages
    }

    /// Produce the tutor's reply, keeping the failure kind.
    ///
    /// An empty or missing completion is not an error; it yields
    /// [`EMPTY_REPLY_FALLBACK`].
    #[tracing::instrument(
        name = "tutor_complete",
        skip(self, history, new_message),
        fields(model = %self.settings.model, history = history.len())
    )]
    pub async fn complete(
        &self,
        history: &[Message],
        new_message: &str,
        context: Option<&str>,
    ) -> Result<String, LlmError> {
        let api_key = self
            .credentials
            .credential()
            .ok_or_else(|| LlmError::MissingCredential {
                env_var: self.settings.credential_env_var.clone(),
            })?;

        let messages = self.build_messages(history, new_message, context);
        let request =
            ChatCompletionRequest::new(&messages, &self.settings.model, self.settings.max_tokens);

        let response = self.transport.create(&api_key, &request).await?;

        Ok(response
            .first_content()
            .unwrap_or(EMPTY_REPLY_FALLBACK)
            .to_string())
    }

    /// Produce the tutor's reply or an `Error: ...` sentence. Never fails.
    pub async fn send_message(
        &self,
        history: &[Message],
        new_message: &str,
        context: Option<&str>,
    ) -> String {
        match self.complete(history, new_message, context).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    provider = %Provider::GitHubModels,
                    error = %e,
                    status = ?e.status_code(),
                    "chat completion failed"
                );
                e.user_message()
            }
        }
    }
}

/// Sends one tutoring turn using default settings and the `GITHUB_TOKEN`
/// environment variable.
pub async fn send_message(history: &[Message], new_message: &str, context: Option<&str>) -> String {
    match TutorGateway::new(TutorSettings::default()) {
        Ok(gateway) => gateway.send_message(history, new_message, context).await,
        Err(e) => {
            error!(error = %e, "failed to initialise tutor gateway");
            e.user_message()
        }
    }
}
