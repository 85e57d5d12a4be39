use crate::{domain::responses::CardResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_card(&self, card_number: &str) -> Result<Option<CardResponse>, ServiceError>;

    /// `None` when the card is missing or blocked.
    async fn find_valid_card(
        &self,
        card_number: &str,
    ) -> Result<Option<CardResponse>, ServiceError>;

    /// `None` when the card is missing, blocked, or its balance does not
    /// cover `amount`.
    async fn find_valid_covered_card(
        &self,
        card_number: &str,
        amount: Decimal,
    ) -> Result<Option<CardResponse>, ServiceError>;

    async fn find_all_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<CardResponse>, ServiceError>;
}
