use chrono::{DateTime, Utc};

use crate::chat::{ChatMessage, ChatRole};

use super::id::ConversationId;

const TITLE_MAX_CHARS: usize = 40;
const TITLE_ELLIPSIS: char = '…';

/// A named conversation. The first message is always the system preamble.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: ConversationId,
    title: String,
    created_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(title: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            id: ConversationId::new(),
            title: title.into(),
            created_at: Utc::now(),
            messages: vec![ChatMessage::system().content(system_prompt).build()],
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Every message, system preamble included. This is the completion payload.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages shown in the transcript.
    pub fn visible(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|msg| msg.role.is_visible())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    pub fn trailing_role(&self) -> Option<ChatRole> {
        self.messages.last().map(|msg| msg.role)
    }

    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|msg| msg.role == ChatRole::User)
            .count()
    }

    /// History preceding the trailing assistant message, if the
    /// conversation ends with one.
    pub fn before_trailing_assistant(&self) -> Option<&[ChatMessage]> {
        match self.messages.split_last() {
            Some((last, rest)) if last.role == ChatRole::Assistant => Some(rest),
            _ => None,
        }
    }

    /// Replaces the content of the trailing assistant message in place.
    pub fn overwrite_last_assistant(&mut self, content: impl Into<String>) -> bool {
        match self.messages.last_mut() {
            Some(last) if last.role == ChatRole::Assistant => {
                last.content = content.into();
                true
            }
            _ => false,
        }
    }

    /// Derives the title from the first line of the first user message.
    pub fn title_from_first_user(&mut self) {
        let first_user = self
            .messages
            .iter()
            .find(|msg| msg.role == ChatRole::User);
        if let Some(msg) = first_user {
            if let Some(title) = truncate_title(&msg.content) {
                self.title = title;
            }
        }
    }
}

fn truncate_title(text: &str) -> Option<String> {
    let first_line = text.trim().lines().next().unwrap_or_default().trim_end();
    let mut title = first_line.chars().take(TITLE_MAX_CHARS).collect::<String>();
    if title.is_empty() {
        return None;
    }
    if first_line.chars().count() > TITLE_MAX_CHARS {
        title.push(TITLE_ELLIPSIS);
    }
    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn conversation_with_user(text: &str) -> Conversation {
        let mut conversation = Conversation::new("Percakapan 1", "system");
        conversation.push(ChatRole::User, text);
        conversation
    }

    #[test]
    fn seeded_with_hidden_system_message() {
        let conversation = Conversation::new("Percakapan 1", "Kamu adalah asisten.");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].role, ChatRole::System);
        assert_eq!(conversation.visible().count(), 0);
    }

    #[test]
    fn visible_keeps_order_and_skips_system() {
        let mut conversation = conversation_with_user("halo");
        conversation.push(ChatRole::Assistant, "hai");
        conversation.push(ChatRole::User, "apa kabar");
        let visible: Vec<_> = conversation
            .visible()
            .map(|msg| msg.content.as_str())
            .collect();
        assert_eq!(visible, vec!["halo", "hai", "apa kabar"]);
        assert_eq!(conversation.messages()[0].role, ChatRole::System);
    }

    #[test]
    fn long_first_message_is_truncated_with_ellipsis() {
        let text = "Bagaimana cara belajar Python dengan cepat dan efektif setiap hari";
        let mut conversation = conversation_with_user(text);
        conversation.title_from_first_user();
        let expected: String = text.chars().take(40).collect::<String>() + "…";
        assert_eq!(conversation.title(), expected);
    }

    #[rstest]
    #[case("Hi", "Hi")]
    #[case("   Hi   ", "Hi")]
    #[case("Judul\nbaris kedua", "Judul")]
    #[case("Hi\nthere", "Hi")]
    #[case("Ünïcödé ✨", "Ünïcödé ✨")]
    fn title_cases(#[case] input: &str, #[case] expected: &str) {
        let mut conversation = conversation_with_user(input);
        conversation.title_from_first_user();
        assert_eq!(conversation.title(), expected);
    }

    #[test]
    fn exactly_forty_chars_has_no_ellipsis() {
        let text = "a".repeat(40);
        let mut conversation = conversation_with_user(&text);
        conversation.title_from_first_user();
        assert_eq!(conversation.title(), text);
    }

    #[test]
    fn title_unchanged_without_user_message() {
        let mut conversation = Conversation::new("Percakapan 3", "system");
        conversation.push(ChatRole::Assistant, "unprompted");
        conversation.title_from_first_user();
        assert_eq!(conversation.title(), "Percakapan 3");
    }

    #[test]
    fn overwrite_only_touches_trailing_assistant() {
        let mut conversation = conversation_with_user("q");
        assert!(!conversation.overwrite_last_assistant("nope"));
        conversation.push(ChatRole::Assistant, "old");
        assert!(conversation.overwrite_last_assistant("new"));
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.messages()[2].content, "new");
        assert_eq!(conversation.before_trailing_assistant().map(<[_]>::len), Some(2));
    }
}
