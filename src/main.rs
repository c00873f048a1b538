//! Gateway binary entrypoint.

use anyhow::Context;
use sportsgate::config::Settings;
use sportsgate::{server, Gateway};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().context("Failed to load gateway settings")?;
    let gateway = Gateway::new(settings)?;

    server::run(gateway).await?;
    Ok(())
}
