use confab::session::{CycleOutcome, TurnState};

use super::commands::list_models;
use super::render;
use super::setup::SessionSetup;
use super::slash::{SlashCommand, HELP};
use super::utils::LineReader;

const PROMPT: &str = "› ";
const CONTINUATION: &str = "… ";

enum Flow {
    Continue,
    Quit,
}

pub async fn run_chat(mut session: SessionSetup) -> anyhow::Result<()> {
    let mut input = LineReader::new();
    println!("{}", render::header(&session.ctx));
    println!("Ketik /help untuk daftar perintah.");

    while let Some(line) = input.message(PROMPT, CONTINUATION).await? {
        let flow = match SlashCommand::parse(&line) {
            Some(command) => handle_command(&mut session, command),
            None => {
                session.controller.submit(&mut session.ctx, &line);
                Flow::Continue
            }
        };
        if let Flow::Quit = flow {
            break;
        }
        service(&mut session).await?;
    }
    Ok(())
}

/// Runs control cycles until idle, showing an indicator while each
/// completion is outstanding.
async fn service(session: &mut SessionSetup) -> anyhow::Result<()> {
    loop {
        match session.ctx.turn_state() {
            TurnState::Idle => {
                // Drain a regeneration that no longer has anything to replace.
                session.controller.run_cycle(&mut session.ctx).await;
                return Ok(());
            }
            TurnState::PendingGeneration => println!("● Mengetik…"),
            TurnState::PendingRegeneration => println!("● Mengganti jawaban sesuai model…"),
        }
        match session.controller.run_cycle(&mut session.ctx).await {
            CycleOutcome::Idle => return Ok(()),
            CycleOutcome::Generated(turn) | CycleOutcome::Regenerated(turn) => {
                render::reveal_turn(&turn, session.reveal_delay).await?;
            }
        }
    }
}

fn handle_command(session: &mut SessionSetup, command: SlashCommand) -> Flow {
    let ctx = &mut session.ctx;
    match command {
        SlashCommand::New(title) => {
            ctx.store_mut().create(title);
            println!("{}", render::header(ctx));
        }
        SlashCommand::Delete => {
            let id = ctx.store().active_id();
            match ctx.store_mut().delete(id) {
                Ok(()) => println!("{}", render::transcript(ctx)),
                Err(err) => println!("⚠️  {err}"),
            }
        }
        SlashCommand::Rename(title) => {
            let id = ctx.store().active_id();
            if ctx.store_mut().rename(id, &title) {
                println!("Nama chat: {}", ctx.active_conversation().title());
            } else {
                println!("Nama tidak boleh kosong.");
            }
        }
        SlashCommand::Switch(position) => match ctx.store().at_position(position) {
            Some(id) => {
                ctx.store_mut().set_active(id);
                println!("{}", render::transcript(ctx));
            }
            None => println!("Tidak ada percakapan nomor {position}."),
        },
        SlashCommand::List => println!("{}", render::conversation_list(ctx.store())),
        SlashCommand::Model(query) => {
            let Some(model) = ctx.catalog().resolve(&query).cloned() else {
                println!("Model '{query}' tidak dikenal. Lihat /models.");
                return Flow::Continue;
            };
            session.controller.select_model(&mut session.ctx, &model.id);
            println!("Model: {} ({})", model.label, model.id);
        }
        SlashCommand::Models => list_models(ctx.catalog()),
        SlashCommand::History => println!("{}", render::transcript(ctx)),
        SlashCommand::Help => println!("{HELP}"),
        SlashCommand::Quit => return Flow::Quit,
        SlashCommand::Invalid(reason) => println!("{reason}"),
    }
    Flow::Continue
}
