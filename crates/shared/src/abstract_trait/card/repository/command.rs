use crate::{
    domain::enums::CardStatus, errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Row values for a card insert; the balance always starts at zero.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub user_id: i64,
    pub card_number: String,
    pub expiration: String,
    pub cvc: String,
    pub status: CardStatus,
}

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandRepositoryTrait {
    async fn insert(&self, card: &NewCard) -> Result<CardModel, RepositoryError>;

    /// Compare-and-swap balance write: succeeds only if the row still holds
    /// `expected_version`, bumping the version by one. A miss surfaces as
    /// Conflict when the row exists, NotFound otherwise.
    async fn update_balance(
        &self,
        card_id: i64,
        new_balance: Decimal,
        expected_version: i32,
    ) -> Result<(), RepositoryError>;
}
