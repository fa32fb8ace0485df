use serde::Deserialize;

use super::{ChatConfig, EndpointConfig, LoggingConfig, ModelConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Label or backend id of the model selected at start-up.
    pub default_model: Option<String>,
    pub chat: ChatConfig,
    pub openrouter: EndpointConfig,
    /// Replaces the built-in catalog when non-empty.
    pub models: Vec<ModelConfig>,
    pub logging: LoggingConfig,
}
