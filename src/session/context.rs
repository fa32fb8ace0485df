use secrecy::SecretString;

use crate::chat::{ChatRole, GenerationParams};
use crate::conversation::{Conversation, ConversationStore};
use crate::model::ModelCatalog;

use super::events::{ControlEvent, ControlSlot, TurnState};

pub const DEFAULT_SYSTEM_PROMPT: &str = "Kamu adalah asisten yang membantu dan sopan. Jawab dalam Bahasa Indonesia baku kecuali diminta lain.";

/// Everything one interactive session owns. Built once at start-up and
/// passed explicitly to every controller operation.
#[derive(Debug)]
pub struct SessionContext {
    store: ConversationStore,
    catalog: ModelCatalog,
    active_model: Option<String>,
    params: GenerationParams,
    api_key: SecretString,
    control: ControlSlot,
}

impl SessionContext {
    pub fn new(system_prompt: impl Into<String>, catalog: ModelCatalog, api_key: SecretString) -> Self {
        Self {
            store: ConversationStore::new(system_prompt),
            catalog,
            active_model: None,
            params: GenerationParams::default(),
            api_key,
            control: ControlSlot::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConversationStore {
        &mut self.store
    }

    pub fn active_conversation(&self) -> &Conversation {
        self.store.active()
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn active_model(&self) -> Option<&str> {
        self.active_model.as_deref()
    }

    /// Model used for the next request: the selected one, else the catalog default.
    pub fn model_id(&self) -> &str {
        self.active_model
            .as_deref()
            .or_else(|| self.catalog.default_model().map(|m| m.id.as_str()))
            .unwrap_or_default()
    }

    pub(crate) fn set_active_model(&mut self, model_id: String) {
        self.active_model = Some(model_id);
    }

    pub fn params(&self) -> GenerationParams {
        self.params
    }

    pub fn set_params(&mut self, params: GenerationParams) {
        self.params = params;
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: SecretString) {
        self.api_key = api_key;
    }

    pub fn pending_control(&self) -> Option<ControlEvent> {
        self.control.peek()
    }

    pub(crate) fn control_mut(&mut self) -> &mut ControlSlot {
        &mut self.control
    }

    /// Peeks at what the next control cycle will do with the active conversation.
    pub fn turn_state(&self) -> TurnState {
        let conversation = self.store.active();
        if self.control.peek() == Some(ControlEvent::RegenerateLastAnswer)
            && conversation.before_trailing_assistant().is_some()
        {
            TurnState::PendingRegeneration
        } else if generation_due(conversation) {
            TurnState::PendingGeneration
        } else {
            TurnState::Idle
        }
    }
}

pub(crate) fn generation_due(conversation: &Conversation) -> bool {
    conversation.len() >= 2 && conversation.trailing_role() == Some(ChatRole::User)
}
