use anyhow::{Context, Result};
use shared::config::HttpClientConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub clients: HttpClientConfig,
}

impl ServerConfig {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing env: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let clients = HttpClientConfig::init()?;

        Ok(Self { port, clients })
    }
}
