//! OpenRouter chat-completion client.
//!
//! Speaks the OpenAI-compatible `/chat/completions` dialect. Credentials,
//! model and sampling parameters come with each request, so one client
//! serves every model in the catalog.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, CompletionClient, CompletionRequest};
use crate::error::LLMError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Configuration for the OpenRouter client.
#[derive(Debug)]
pub struct OpenRouterConfig {
    /// Base URL without the trailing `/chat/completions`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Client for interacting with OpenRouter's API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct OpenRouter {
    pub config: Arc<OpenRouterConfig>,
    pub client: Client,
}

#[derive(Serialize)]
struct OpenRouterChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct OpenRouterChatResponse {
    #[serde(default)]
    choices: Vec<OpenRouterChatChoice>,
}

#[derive(Deserialize, Debug)]
struct OpenRouterChatChoice {
    message: OpenRouterChatMsg,
}

#[derive(Deserialize, Debug)]
struct OpenRouterChatMsg {
    #[serde(default)]
    content: Option<String>,
}

impl OpenRouter {
    pub fn new(base_url: Option<String>, timeout_seconds: Option<u64>) -> Result<Self, LLMError> {
        let timeout_seconds = timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self::with_client(client, base_url, Some(timeout_seconds)))
    }

    /// Creates a new OpenRouter client with a custom HTTP client.
    pub fn with_client(
        client: Client,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            config: Arc::new(OpenRouterConfig {
                base_url,
                timeout_seconds: timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            }),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.config.timeout_seconds
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn map_transport(&self, err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::Timeout(self.config.timeout_seconds)
        } else {
            LLMError::from(err)
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouter {
    /// Sends the full message sequence to OpenRouter and returns the text
    /// of the first choice.
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LLMError> {
        let api_key = request.api_key.expose_secret();
        if api_key.trim().is_empty() {
            return Err(LLMError::MissingCredential);
        }

        let body = OpenRouterChatRequest {
            model: request.model,
            messages: request.messages,
            max_tokens: request.params.max_tokens(),
            temperature: request.params.temperature(),
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("OpenRouter request payload: {}", json);
            }
        }

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&body)
            .send()
            .await
            .map_err(|err| self.map_transport(err))?;

        let status = resp.status();
        log::debug!("OpenRouter HTTP status: {}", status);

        let raw = resp.text().await.map_err(|err| self.map_transport(err))?;
        if status != StatusCode::OK {
            return Err(LLMError::EndpointStatus {
                status: status.as_u16(),
                body: raw,
            });
        }

        let parsed: OpenRouterChatResponse =
            serde_json::from_str(&raw).map_err(|err| LLMError::ResponseFormatError {
                message: err.to_string(),
                raw_response: raw.clone(),
            })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::ResponseFormatError {
                message: "response contained no choices".to_string(),
                raw_response: raw.clone(),
            })?;
        Ok(choice.message.content.unwrap_or_default())
    }
}
