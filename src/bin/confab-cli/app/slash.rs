#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    New(Option<String>),
    Delete,
    Rename(String),
    Switch(usize),
    List,
    Model(String),
    Models,
    History,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
/new [judul]      buat percakapan baru
/delete           hapus percakapan aktif
/rename <judul>   ganti nama percakapan aktif
/switch <n>       pindah ke percakapan nomor n
/list             daftar percakapan
/model <nama|id>  ganti model (jawaban terakhir dibuat ulang)
/models           daftar model
/history          tampilkan percakapan aktif
/help             bantuan ini
/quit             keluar
Akhiri baris dengan \\ untuk menulis beberapa baris.";

impl SlashCommand {
    /// `None` when `line` is a plain message rather than a command.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let body = line.strip_prefix('/')?;
        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };
        let command = match name.to_lowercase().as_str() {
            "new" => Self::New(Some(rest.to_string()).filter(|t| !t.is_empty())),
            "delete" | "del" => Self::Delete,
            "rename" => Self::Rename(rest.to_string()),
            "switch" | "sw" => match rest.parse() {
                Ok(n) => Self::Switch(n),
                Err(_) => Self::Invalid(format!("/switch butuh nomor, bukan '{rest}'")),
            },
            "list" | "ls" => Self::List,
            "model" if rest.is_empty() => Self::Invalid("/model butuh nama model".to_string()),
            "model" => Self::Model(rest.to_string()),
            "models" => Self::Models,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => Self::Invalid(format!("perintah tidak dikenal: /{other}")),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(SlashCommand::parse("halo /new"), None);
    }

    #[test]
    fn parses_arguments() {
        assert_eq!(
            SlashCommand::parse("/new  Resep kue "),
            Some(SlashCommand::New(Some("Resep kue".to_string())))
        );
        assert_eq!(SlashCommand::parse("/new"), Some(SlashCommand::New(None)));
        assert_eq!(SlashCommand::parse("/switch 2"), Some(SlashCommand::Switch(2)));
        assert_eq!(
            SlashCommand::parse("/model Grok 3 Mini"),
            Some(SlashCommand::Model("Grok 3 Mini".to_string()))
        );
        assert_eq!(
            SlashCommand::parse("/rename   "),
            Some(SlashCommand::Rename(String::new()))
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(matches!(
            SlashCommand::parse("/switch dua"),
            Some(SlashCommand::Invalid(_))
        ));
        assert!(matches!(SlashCommand::parse("/model"), Some(SlashCommand::Invalid(_))));
        assert!(matches!(SlashCommand::parse("/dance"), Some(SlashCommand::Invalid(_))));
    }
}
