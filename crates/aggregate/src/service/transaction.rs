use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::{
    domain::requests::CreateTransactionRequest,
    errors::{ServiceError, error_from_response, transport_error},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

pub type DynTransactionIntegration = Arc<dyn TransactionIntegrationTrait + Send + Sync>;

/// Outbound calls to the transaction service used by the orchestrator.
#[async_trait]
pub trait TransactionIntegrationTrait {
    async fn create_transaction(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<(), ServiceError>;
}

#[derive(Debug)]
pub struct TransactionHttpClientService {
    client: reqwest::Client,
    base_url: String,
}

impl TransactionHttpClientService {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build transaction service HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TransactionIntegrationTrait for TransactionHttpClientService {
    #[instrument(skip(self, req), level = "info")]
    async fn create_transaction(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<(), ServiceError> {
        let url = format!("{}/transactions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        info!(
            "recorded {} of {} from card {} to card {}",
            req.transaction_type, req.amount, req.sender_card_id, req.recipient_card_id
        );
        Ok(())
    }
}
