use anyhow::{Context, Result};

/// Base URLs of the downstream services plus the per-call timeout applied
/// to every outbound request built from them.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub card_service_base_url: String,
    pub transaction_service_base_url: String,
    pub timeout_secs: u64,
}

impl HttpClientConfig {
    pub fn init() -> Result<Self> {
        let card_service_base_url = std::env::var("CARD_SERVICE_BASE_URL")
            .context("Missing environment variable: CARD_SERVICE_BASE_URL")?;

        let transaction_service_base_url = std::env::var("TRANSACTION_SERVICE_BASE_URL")
            .context("Missing environment variable: TRANSACTION_SERVICE_BASE_URL")?;

        let timeout_secs = match std::env::var("HTTP_CLIENT_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .context("HTTP_CLIENT_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => 10,
        };

        Ok(Self {
            card_service_base_url,
            transaction_service_base_url,
            timeout_secs,
        })
    }
}
