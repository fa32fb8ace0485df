use crate::chat::ChatRole;

use super::error::StoreError;
use super::id::ConversationId;
use super::state::Conversation;

const DEFAULT_TITLE_PREFIX: &str = "Percakapan";

/// In-memory conversations in creation order, one of which is active.
///
/// The store always holds at least one conversation and the active id
/// always refers to one of them.
#[derive(Debug)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    active_id: ConversationId,
    system_prompt: String,
}

impl ConversationStore {
    /// Creates the store with its default first conversation.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        let first = Conversation::new(default_title(1), system_prompt.clone());
        let active_id = first.id();
        Self {
            conversations: vec![first],
            active_id,
            system_prompt,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn create(&mut self, title: Option<String>) -> ConversationId {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title(self.conversations.len() + 1));
        let conversation = Conversation::new(title, self.system_prompt.clone());
        let id = conversation.id();
        log::info!("created conversation {id} '{}'", conversation.title());
        self.conversations.push(conversation);
        self.active_id = id;
        id
    }

    pub fn delete(&mut self, id: ConversationId) -> Result<(), StoreError> {
        let index = self.index_of(id).ok_or(StoreError::UnknownConversation(id))?;
        if self.conversations.len() <= 1 {
            log::warn!("refusing to delete the last conversation {id}");
            return Err(StoreError::LastConversation);
        }
        self.conversations.remove(index);
        if self.active_id == id {
            let next = index.saturating_sub(1);
            self.active_id = self.conversations[next].id();
        }
        log::info!("deleted conversation {id}, active is now {}", self.active_id);
        Ok(())
    }

    pub fn rename(&mut self, id: ConversationId, new_title: &str) -> bool {
        let title = new_title.trim();
        if title.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.set_title(title.to_string());
                true
            }
            None => false,
        }
    }

    pub fn set_active(&mut self, id: ConversationId) -> bool {
        if self.index_of(id).is_some() {
            self.active_id = id;
            true
        } else {
            false
        }
    }

    /// `(id, title)` pairs ordered by creation time.
    pub fn list(&self) -> Vec<(ConversationId, String)> {
        self.ordered()
            .into_iter()
            .map(|c| (c.id(), c.title().to_string()))
            .collect()
    }

    /// 1-based index of `id` within [`list`](Self::list).
    pub fn position(&self, id: ConversationId) -> Option<usize> {
        self.ordered()
            .iter()
            .position(|c| c.id() == id)
            .map(|index| index + 1)
    }

    /// Conversation at the 1-based `position` within [`list`](Self::list).
    pub fn at_position(&self, position: usize) -> Option<ConversationId> {
        let index = position.checked_sub(1)?;
        self.ordered().get(index).map(|c| c.id())
    }

    pub fn append(&mut self, id: ConversationId, role: ChatRole, content: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.push(role, content);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id() == id)
    }

    pub fn active_id(&self) -> ConversationId {
        self.active_id
    }

    pub fn active(&self) -> &Conversation {
        let index = self.index_of(self.active_id).unwrap_or_default();
        &self.conversations[index]
    }

    pub fn active_mut(&mut self) -> &mut Conversation {
        let index = self.index_of(self.active_id).unwrap_or_default();
        &mut self.conversations[index]
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn index_of(&self, id: ConversationId) -> Option<usize> {
        self.conversations.iter().position(|c| c.id() == id)
    }

    fn ordered(&self) -> Vec<&Conversation> {
        let mut ordered: Vec<&Conversation> = self.conversations.iter().collect();
        ordered.sort_by_key(|c| c.created_at());
        ordered
    }
}

fn default_title(n: usize) -> String {
    format!("{DEFAULT_TITLE_PREFIX} {n}")
}
