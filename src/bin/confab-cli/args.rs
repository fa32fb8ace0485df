use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "confab",
    about = "Multi-conversation terminal chat over OpenRouter, plus a career quiz"
)]
pub struct CliArgs {
    /// `chat` (default), `quiz` or `models`
    #[arg(index = 1)]
    pub command: Option<String>,
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub system: Option<String>,
    #[arg(long)]
    pub temperature: Option<f32>,
    #[arg(long)]
    pub max_tokens: Option<u32>,
    #[arg(long)]
    pub timeout: Option<u64>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Send a single prompt, print the answer and exit
    #[arg(long)]
    pub prompt: Option<String>,
    /// Write the quiz history to this CSV file on exit
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandKind {
    Chat,
    Quiz,
    Models,
}

impl CommandKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "chat" => Some(Self::Chat),
            "quiz" | "kuis" => Some(Self::Quiz),
            "models" => Some(Self::Models),
            _ => None,
        }
    }
}

impl CliArgs {
    pub fn command_kind(&self) -> Result<CommandKind, String> {
        match self.command.as_deref() {
            None => Ok(CommandKind::Chat),
            Some(raw) => CommandKind::parse(raw).ok_or_else(|| format!("unknown command '{raw}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_is_the_default_command() {
        let args = CliArgs::parse_from(["confab"]);
        assert_eq!(args.command_kind(), Ok(CommandKind::Chat));
    }

    #[test]
    fn parses_quiz_with_export() {
        let args = CliArgs::parse_from(["confab", "quiz", "--export", "out.csv"]);
        assert_eq!(args.command_kind(), Ok(CommandKind::Quiz));
        assert_eq!(args.export, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn rejects_unknown_command() {
        let args = CliArgs::parse_from(["confab", "dance"]);
        assert!(args.command_kind().is_err());
    }

    #[test]
    fn parses_generation_flags() {
        let args = CliArgs::parse_from([
            "confab",
            "-m",
            "Grok 3 Mini",
            "--max-tokens",
            "512",
            "--temperature",
            "0.3",
        ]);
        assert_eq!(args.model.as_deref(), Some("Grok 3 Mini"));
        assert_eq!(args.max_tokens, Some(512));
        assert_eq!(args.temperature, Some(0.3));
    }
}
