use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented stdin shared by the interactive modes.
pub struct LineReader {
    lines: Lines<BufReader<Stdin>>,
}

impl LineReader {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints `prompt` and reads one line. `None` on end of input.
    pub async fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Reads a possibly multi-line message. A trailing `\` continues the
    /// message on the next line.
    pub async fn message(&mut self, prompt: &str, continuation: &str) -> anyhow::Result<Option<String>> {
        let Some(mut line) = self.prompt(prompt).await? else {
            return Ok(None);
        };
        let mut message = String::new();
        while line.ends_with('\\') {
            line.pop();
            message.push_str(&line);
            message.push('\n');
            match self.prompt(continuation).await? {
                Some(next) => line = next,
                None => return Ok(Some(message)),
            }
        }
        message.push_str(&line);
        Ok(Some(message))
    }

    /// Reads everything left on stdin.
    pub async fn rest(&mut self) -> anyhow::Result<String> {
        let mut collected = Vec::new();
        while let Some(line) = self.lines.next_line().await? {
            collected.push(line);
        }
        Ok(collected.join("\n"))
    }
}
