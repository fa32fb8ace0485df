mod chat;
mod commands;
mod oneshot;
mod quiz;
mod render;
mod setup;
mod slash;
mod utils;

use clap::Parser;
use std::io::IsTerminal;

use crate::args::{CliArgs, CommandKind};
use crate::config::load_config;
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let kind = args.command_kind().map_err(anyhow::Error::msg)?;
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    for warning in &loaded.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "starting {:?} (config file {} {})",
        kind,
        loaded.paths.config_file.display(),
        if loaded.config_exists { "loaded" } else { "absent, using defaults" }
    );

    match kind {
        CommandKind::Models => {
            commands::list_models(&setup::build_catalog(&loaded.config));
            Ok(())
        }
        CommandKind::Quiz => quiz::run_quiz(args.export.as_deref()).await,
        CommandKind::Chat => {
            let session = setup::SessionSetup::from_args(&args, &loaded.config)?;
            if args.prompt.is_some() || !std::io::stdin().is_terminal() {
                oneshot::run_oneshot(session, args.prompt).await
            } else {
                chat::run_chat(session).await
            }
        }
    }
}
