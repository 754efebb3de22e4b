use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::client::ChatClient;
use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::message::{
    ChatCompletionRequest, ChatCompletionResponse, ErrorResponse, Exchange, ModelOptions,
};

/// Chat-completions client for OpenAI and compatible endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| RelayError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, exchange: &Exchange, options: &ModelOptions) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(RelayError::Auth(
                "no API key configured (set OPENAI_API_KEY)".to_string(),
            ));
        };

        let url = self.endpoint();
        let request = ChatCompletionRequest::new(exchange, options);
        debug!(model = options.model, %url, "sending chat completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                RelayError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "chat completion response");

        if !status.is_success() {
            warn!(%status, "chat completion rejected");
            return Err(error_for_status(status, &body));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "unparseable chat completion body");
            RelayError::Other(format!("malformed response from endpoint: {e}"))
        })?;

        parsed
            .into_first_text()
            .ok_or_else(|| RelayError::Other("endpoint returned no message content".to_string()))
    }
}

fn error_for_status(status: StatusCode, body: &str) -> RelayError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|r| r.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RelayError::Auth(message),
        _ => RelayError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
