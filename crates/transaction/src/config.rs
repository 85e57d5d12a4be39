use anyhow::Result;
use shared::config::Config;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            port: config.port,
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
        })
    }
}
