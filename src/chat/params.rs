use serde::{Deserialize, Serialize};

use crate::error::LLMError;

pub const MIN_MAX_TOKENS: u32 = 128;
pub const MAX_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 1.2;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sampling parameters sent along with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    max_tokens: u32,
    temperature: f32,
}

impl GenerationParams {
    pub fn new(max_tokens: u32, temperature: f32) -> Result<Self, LLMError> {
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
            return Err(LLMError::InvalidRequest(format!(
                "max_tokens must be between {MIN_MAX_TOKENS} and {MAX_MAX_TOKENS}, got {max_tokens}"
            )));
        }
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(LLMError::InvalidRequest(format!(
                "temperature must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE}, got {temperature}"
            )));
        }
        Ok(Self {
            max_tokens,
            temperature,
        })
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
