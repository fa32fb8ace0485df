use crate::chat::{reveal, ChatRole, CompletionClient, CompletionRequest, Reveal};
use crate::conversation::ConversationId;
use crate::error::LLMError;

use super::context::{generation_due, SessionContext};
use super::events::ControlEvent;

const APOLOGY_PREFIX: &str = "Maaf, terjadi kesalahan:";

/// Assistant text substituted for a failed completion.
pub fn apology(err: &LLMError) -> String {
    format!("{APOLOGY_PREFIX} {err}")
}

/// A finished assistant turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub conversation: ConversationId,
    pub model: String,
    pub text: String,
    /// The completion failed and `text` is an apology.
    pub failed: bool,
}

impl Turn {
    pub fn reveal(&self) -> Reveal {
        reveal(self.text.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Idle,
    /// A new assistant message was appended.
    Generated(Turn),
    /// The trailing assistant message was overwritten in place.
    Regenerated(Turn),
}

impl CycleOutcome {
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            CycleOutcome::Idle => None,
            CycleOutcome::Generated(turn) | CycleOutcome::Regenerated(turn) => Some(turn),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CycleOutcome::Idle)
    }
}

/// Drives turn-taking for the active conversation of a [`SessionContext`].
#[derive(Debug)]
pub struct SessionController<C> {
    client: C,
}

impl<C: CompletionClient> SessionController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Appends a user message to the active conversation. Blank input is
    /// ignored. The first user message also names the conversation.
    pub fn submit(&self, ctx: &mut SessionContext, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let conversation = ctx.store_mut().active_mut();
        conversation.push(ChatRole::User, text);
        if conversation.user_message_count() == 1 {
            conversation.title_from_first_user();
        }
        true
    }

    /// Switches the active model. Queues a regeneration when the model
    /// actually changed and there is an answer to replace. Before the first
    /// selection the catalog default counts as the active model. Returns
    /// whether a regeneration was queued.
    pub fn select_model(&self, ctx: &mut SessionContext, model_id: &str) -> bool {
        let changed = ctx.model_id() != model_id;
        let has_answer = ctx
            .active_conversation()
            .before_trailing_assistant()
            .is_some();
        let queued =
            changed && has_answer && ctx.control_mut().offer(ControlEvent::RegenerateLastAnswer);
        if changed {
            log::info!("model switched to {model_id} (regenerate: {queued})");
        }
        ctx.set_active_model(model_id.to_string());
        queued
    }

    /// Runs one control cycle. A queued regeneration is drained first;
    /// only then is a trailing user message answered.
    pub async fn run_cycle(&self, ctx: &mut SessionContext) -> CycleOutcome {
        let event = ctx.control_mut().take();
        if event == Some(ControlEvent::RegenerateLastAnswer) {
            if let Some(turn) = self.regenerate(ctx).await {
                return CycleOutcome::Regenerated(turn);
            }
        }
        if generation_due(ctx.active_conversation()) {
            return CycleOutcome::Generated(self.generate(ctx).await);
        }
        CycleOutcome::Idle
    }

    /// Runs cycles until nothing is left to do.
    pub async fn drive(&self, ctx: &mut SessionContext) -> Vec<CycleOutcome> {
        let mut outcomes = Vec::new();
        loop {
            let outcome = self.run_cycle(ctx).await;
            if outcome.is_idle() {
                return outcomes;
            }
            outcomes.push(outcome);
        }
    }

    /// Submits `text` and answers it.
    pub async fn send(&self, ctx: &mut SessionContext, text: &str) -> Vec<CycleOutcome> {
        if !self.submit(ctx, text) {
            return Vec::new();
        }
        self.drive(ctx).await
    }

    async fn regenerate(&self, ctx: &mut SessionContext) -> Option<Turn> {
        let conversation = ctx.active_conversation();
        let id = conversation.id();
        let payload = conversation.before_trailing_assistant()?;
        let model = ctx.model_id().to_string();
        let result = self
            .client
            .complete(&CompletionRequest {
                messages: payload,
                model: &model,
                api_key: ctx.api_key(),
                params: ctx.params(),
            })
            .await;
        let turn = into_turn(id, model, result);
        ctx.store_mut()
            .active_mut()
            .overwrite_last_assistant(turn.text.clone());
        Some(turn)
    }

    async fn generate(&self, ctx: &mut SessionContext) -> Turn {
        let conversation = ctx.active_conversation();
        let id = conversation.id();
        let model = ctx.model_id().to_string();
        let result = self
            .client
            .complete(&CompletionRequest {
                messages: conversation.messages(),
                model: &model,
                api_key: ctx.api_key(),
                params: ctx.params(),
            })
            .await;
        let turn = into_turn(id, model, result);
        ctx.store_mut()
            .append(id, ChatRole::Assistant, turn.text.clone());
        turn
    }
}

fn into_turn(conversation: ConversationId, model: String, result: Result<String, LLMError>) -> Turn {
    match result {
        Ok(text) => Turn {
            conversation,
            model,
            text,
            failed: false,
        },
        Err(err) => {
            log::warn!("completion with {model} failed: {err}");
            Turn {
                conversation,
                model,
                text: apology(&err),
                failed: true,
            }
        }
    }
}
