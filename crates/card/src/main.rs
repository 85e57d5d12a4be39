use anyhow::{Context, Result};
use card::{config::ServerConfig, handler::AppRouter, integration::UserIntegrationService, state::AppState};
use shared::{
    abstract_trait::user::DynUserQueryClient,
    config::{Config, ConnectionManager},
    utils::Logger,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("APP_ENV").map(|v| v != "production").unwrap_or(true);
    let _logger = Logger::new("card", is_dev);

    let config = Config::init().context("Failed to load configuration")?;
    let server_config = ServerConfig::from_config(&config)?;

    let db_pool =
        ConnectionManager::new_pool(&server_config.database_url, server_config.run_migrations)
            .await
            .context("Failed to initialize database pool")?;

    let users = Arc::new(UserIntegrationService::new(
        &server_config.user_service_base_url,
        server_config.http_timeout_secs,
    )?) as DynUserQueryClient;

    let state = AppState::new(db_pool, users).context("Failed to create AppState")?;

    AppRouter::serve(server_config.port, state)
        .await
        .context("Failed to start server")?;

    info!("card service shutdown complete");
    Ok(())
}
