//! Single-shot JSON-over-HTTP client shared by providers.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::error::LlmError;

/// Transport settings for the HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Total time allowed for one request. `None` keeps reqwest's defaults.
    pub timeout: Option<Duration>,
}

/// Thin wrapper around `reqwest::Client` that makes exactly one attempt per call.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig, user_agent: Option<&str>) -> Result<Self, LlmError> {
        let default_ua = format!("sqltutor/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body.
    ///
    /// Only `200 OK` counts as success; every other status is returned as
    /// [`LlmError::Api`]. Failures are left for the caller to report.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url)
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| LlmError::Network {
            message: "Request failed".to_string(),
            source: Box::new(e),
        })?;

        let status = res.status();
        if status != StatusCode::OK {
            debug!(status = %status, "API returned error status");

            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(body = %error_text, "error response body");

            return Err(LlmError::Api {
                message: format!("API returned status {}", status.as_u16()),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}
