use std::io::{self, Write};
use std::time::Duration;

use textwrap::Options;

use confab::chat::{ChatMessage, ChatRole};
use confab::conversation::ConversationStore;
use confab::session::{SessionContext, Turn};

const WRAP_WIDTH: usize = 88;

pub fn avatar(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "🧑",
        ChatRole::Assistant => "🤖",
        ChatRole::System => "⚙️",
    }
}

pub fn message(msg: &ChatMessage) -> String {
    let prefix = format!("{} ", avatar(msg.role));
    let options = Options::new(WRAP_WIDTH)
        .initial_indent(&prefix)
        .subsequent_indent("   ");
    textwrap::fill(&msg.content, options)
}

pub fn header(ctx: &SessionContext) -> String {
    let conversation = ctx.active_conversation();
    let model = ctx.model_id();
    let label = ctx.catalog().label_for(model).unwrap_or(model);
    format!(
        "── {} · {} · model {} ({})",
        conversation.title(),
        conversation.created_at().format("%Y-%m-%d %H:%M:%S"),
        label,
        model
    )
}

pub fn transcript(ctx: &SessionContext) -> String {
    let mut out = vec![header(ctx)];
    out.extend(ctx.active_conversation().visible().map(message));
    out.join("\n")
}

pub fn conversation_list(store: &ConversationStore) -> String {
    let active = store.active_id();
    store
        .list()
        .into_iter()
        .enumerate()
        .map(|(index, (id, title))| {
            let marker = if id == active { '*' } else { ' ' };
            format!("{marker} {}. {title}", index + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints a turn chunk by chunk.
pub async fn reveal_turn(turn: &Turn, delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{} ", avatar(ChatRole::Assistant))?;
    for chunk in turn.reveal() {
        write!(stdout, "{chunk}")?;
        stdout.flush()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    writeln!(stdout)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab::model::ModelCatalog;
    use secrecy::SecretString;

    #[test]
    fn wraps_long_messages_under_the_avatar() {
        let msg = ChatMessage::user().content("kata ".repeat(40)).build();
        let rendered = message(&msg);
        let lines: Vec<_> = rendered.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("🧑 kata"));
        assert!(lines[1].starts_with("   kata"));
    }

    #[test]
    fn list_marks_the_active_conversation() {
        let mut store = ConversationStore::new("system");
        store.create(Some("Kedua".to_string()));
        assert_eq!(conversation_list(&store), "  1. Percakapan 1\n* 2. Kedua");
    }

    #[test]
    fn transcript_hides_the_system_preamble() {
        let ctx = SessionContext::new(
            "rahasia",
            ModelCatalog::builtin(),
            SecretString::new(String::new()),
        );
        let text = transcript(&ctx);
        assert!(text.contains("Percakapan 1"));
        assert!(text.contains("DeepSeek V3"));
        assert!(!text.contains("rahasia"));
    }
}
