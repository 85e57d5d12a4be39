use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    domain::responses::CardResponse,
    errors::{ServiceError, error_from_response, transport_error},
    utils::mask_card_number,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

pub type DynCardIntegration = Arc<dyn CardIntegrationTrait + Send + Sync>;

/// Outbound calls to the card service used by the orchestrator.
#[async_trait]
pub trait CardIntegrationTrait {
    /// Fetches the card only if it exists and is not blocked.
    async fn fetch_valid_card(&self, card_number: &str) -> Result<CardResponse, ServiceError>;

    /// Fetches the card only if it exists, is not blocked, and its balance
    /// covers `amount`.
    async fn fetch_covered_card(
        &self,
        card_number: &str,
        amount: Decimal,
    ) -> Result<CardResponse, ServiceError>;

    async fn update_balance(
        &self,
        card_id: i64,
        new_balance: Decimal,
    ) -> Result<(), ServiceError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBalanceBody {
    new_balance: Decimal,
}

#[derive(Debug)]
pub struct CardHttpClientService {
    client: reqwest::Client,
    base_url: String,
}

impl CardHttpClientService {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build card service HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CardIntegrationTrait for CardHttpClientService {
    #[instrument(skip(self, card_number), level = "info")]
    async fn fetch_valid_card(&self, card_number: &str) -> Result<CardResponse, ServiceError> {
        let masked = mask_card_number(card_number);
        let url = format!("{}/cards/{card_number}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let card = response
            .json::<CardResponse>()
            .await
            .map_err(transport_error)?;

        info!("fetched valid card {masked}");
        Ok(card)
    }

    #[instrument(skip(self, card_number), level = "info")]
    async fn fetch_covered_card(
        &self,
        card_number: &str,
        amount: Decimal,
    ) -> Result<CardResponse, ServiceError> {
        let masked = mask_card_number(card_number);
        let url = format!("{}/cards/covered/{card_number}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("amount", amount.to_string())])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let card = response
            .json::<CardResponse>()
            .await
            .map_err(transport_error)?;

        info!("fetched card {masked} covered for {amount}");
        Ok(card)
    }

    #[instrument(skip(self), level = "info")]
    async fn update_balance(
        &self,
        card_id: i64,
        new_balance: Decimal,
    ) -> Result<(), ServiceError> {
        let url = format!("{}/cards/{card_id}/updateBalance", self.base_url);

        let response = self
            .client
            .put(&url)
            .json(&UpdateBalanceBody { new_balance })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        info!("updated balance of card {card_id}");
        Ok(())
    }
}
