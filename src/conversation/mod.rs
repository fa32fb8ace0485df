mod error;
mod id;
mod state;
mod store;

pub use error::StoreError;
pub use id::ConversationId;
pub use state::Conversation;
pub use store::ConversationStore;
