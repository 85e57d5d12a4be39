use crate::{
    domain::requests::FindTransactionsQuery,
    domain::responses::{PagedTransactionResponse, TransactionResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_by_card(
        &self,
        card_id: i64,
        query: &FindTransactionsQuery,
    ) -> Result<PagedTransactionResponse, ServiceError>;

    async fn find_current_month(
        &self,
        card_id: i64,
    ) -> Result<Vec<TransactionResponse>, ServiceError>;
}
