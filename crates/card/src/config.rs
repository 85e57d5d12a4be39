use anyhow::{Context, Result};
use shared::config::Config;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub user_service_base_url: String,
    pub http_timeout_secs: u64,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_service_base_url = std::env::var("USER_SERVICE_BASE_URL")
            .context("Missing environment variable: USER_SERVICE_BASE_URL")?;

        let http_timeout_secs = match std::env::var("HTTP_CLIENT_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .context("HTTP_CLIENT_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => 10,
        };

        Ok(Self {
            port: config.port,
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
            user_service_base_url,
            http_timeout_secs,
        })
    }
}
