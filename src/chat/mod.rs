mod message;
mod params;
mod reveal;
mod traits;

pub use message::{ChatMessage, ChatMessageBuilder, ChatRole};
pub use params::{
    GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MAX_MAX_TOKENS, MAX_TEMPERATURE,
    MIN_MAX_TOKENS, MIN_TEMPERATURE,
};
pub use reveal::{reveal, Reveal};
pub use traits::{CompletionClient, CompletionRequest};
