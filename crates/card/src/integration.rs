use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::{
    abstract_trait::user::UserQueryClientTrait,
    domain::responses::UserResponse,
    errors::{ServiceError, error_from_response, transport_error},
};
use std::time::Duration;
use tracing::{info, instrument};

/// Ownership lookups against the external user service.
#[derive(Debug)]
pub struct UserIntegrationService {
    client: reqwest::Client,
    base_url: String,
}

impl UserIntegrationService {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build user service HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserQueryClientTrait for UserIntegrationService {
    #[instrument(skip(self, username), level = "info")]
    async fn find_by_username(&self, username: &str) -> Result<UserResponse, ServiceError> {
        let url = format!("{}/user/{username}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let user = response
            .json::<UserResponse>()
            .await
            .map_err(transport_error)?;

        info!("resolved user {username} to id {}", user.id);
        Ok(user)
    }
}
