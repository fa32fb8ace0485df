use super::id::ConversationId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Minimal harus ada 1 chat.")]
    LastConversation,
    #[error("unknown conversation {0}")]
    UnknownConversation(ConversationId),
}
