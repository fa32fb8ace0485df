//! HTTP implementations of [`CompletionClient`](crate::chat::CompletionClient).

pub mod openrouter;

pub use openrouter::OpenRouter;
