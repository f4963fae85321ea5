#[path = "wealthsync/app/mod.rs"]
mod app;
#[path = "wealthsync/args.rs"]
mod args;
#[path = "wealthsync/config/mod.rs"]
mod config;
#[path = "wealthsync/logging.rs"]
mod logging;
#[path = "wealthsync/render/mod.rs"]
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
