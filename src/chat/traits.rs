use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::LLMError;

use super::message::ChatMessage;
use super::params::GenerationParams;

/// Everything needed for a single completion call.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    /// Full payload, system preamble included.
    pub messages: &'a [ChatMessage],
    /// Backend model identifier, e.g. `x-ai/grok-3-mini`.
    pub model: &'a str,
    pub api_key: &'a SecretString,
    pub params: GenerationParams,
}

/// Trait for endpoints that turn a message sequence into generated text.
#[async_trait]
pub trait CompletionClient: Sync + Send {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LLMError>;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LLMError> {
        (**self).complete(request).await
    }
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Box<T> {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LLMError> {
        (**self).complete(request).await
    }
}
