use std::io::{self, Write};

use super::setup::SessionSetup;
use super::utils::LineReader;

/// Answers a single prompt taken from `--prompt` or piped stdin.
pub async fn run_oneshot(mut session: SessionSetup, prompt: Option<String>) -> anyhow::Result<()> {
    let prompt = match prompt {
        Some(prompt) => prompt,
        None => LineReader::new().rest().await?,
    };
    let outcomes = session.controller.send(&mut session.ctx, &prompt).await;
    let mut stdout = io::stdout();
    let mut failed = false;
    for turn in outcomes.iter().filter_map(|outcome| outcome.turn()) {
        writeln!(stdout, "{}", turn.text)?;
        failed |= turn.failed;
    }
    stdout.flush()?;
    if failed {
        anyhow::bail!("completion failed");
    }
    Ok(())
}
