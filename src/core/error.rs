use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shown to end users when a failure carries no message of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong with the AI service.";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("{env_var} is missing. Please check your environment variables.")]
    MissingCredential { env_var: String },

    #[error("{0}")]
    ProviderConfiguration(String),

    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("{message}: {source}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("{message}: {source}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl LlmError {
    /// Status code returned by the remote service, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Renders the error as the `Error: ...` line shown to end users.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            format!("Error: {GENERIC_FAILURE}")
        } else {
            format!("Error: {message}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_renders_fixed_sentence() {
        let error = LlmError::MissingCredential {
            env_var: "GITHUB_TOKEN".to_string(),
        };
        assert_eq!(
            error.user_message(),
            "Error: GITHUB_TOKEN is missing. Please check your environment variables."
        );
    }

    #[test]
    fn api_error_keeps_status() {
        let error = LlmError::Api {
            message: "API returned status 503".to_string(),
            status_code: Some(503),
        };
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(error.user_message(), "Error: API returned status 503");
    }

    #[test]
    fn empty_message_falls_back_to_generic_phrase() {
        let error = LlmError::ProviderConfiguration(String::new());
        assert_eq!(
            error.user_message(),
            "Error: Something went wrong with the AI service."
        );
    }
}
