use aggregate::{config::ServerConfig, handler::AppRouter, state::AppState};
use anyhow::{Context, Result};
use shared::utils::Logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("APP_ENV").map(|v| v != "production").unwrap_or(true);
    let _logger = Logger::new("aggregate", is_dev);

    let config = ServerConfig::init().context("Failed to load configuration")?;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("card aggregate shutdown complete");
    Ok(())
}
