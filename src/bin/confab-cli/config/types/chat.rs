use serde::Deserialize;

use super::DEFAULT_REVEAL_DELAY_MS;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
    /// Pause between revealed chunks of a reply.
    pub reveal_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            timeout_seconds: None,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}
