#[path = "confab-cli/app/mod.rs"]
mod app;
#[path = "confab-cli/args.rs"]
mod args;
#[path = "confab-cli/config/mod.rs"]
mod config;
#[path = "confab-cli/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
