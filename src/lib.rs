//! Session core for a multi-conversation chat client backed by an
//! OpenRouter-style completion endpoint, plus a small weighted career quiz.
//!
//! The crate is organised leaves first:
//!
//! - [`chat`]: role-tagged messages, generation parameters, the
//!   [`CompletionClient`](chat::CompletionClient) seam and reply reveal.
//! - [`backends`]: the HTTP client for the completion endpoint.
//! - [`conversation`]: conversations and the in-memory store.
//! - [`model`]: the model catalog.
//! - [`session`]: the explicit session context and the turn controller.
//! - [`quiz`]: question catalog, scoring and history.

pub mod backends;
pub mod chat;
pub mod conversation;
pub mod error;
pub mod model;
pub mod quiz;
pub mod session;

pub use error::LLMError;
