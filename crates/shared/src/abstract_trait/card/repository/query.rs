use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryRepositoryTrait {
    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError>;
    async fn find_by_id(&self, card_id: i64) -> Result<Option<CardModel>, RepositoryError>;
    async fn find_all_by_user_id(&self, user_id: i64) -> Result<Vec<CardModel>, RepositoryError>;
}
