use crate::{errors::RepositoryError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

/// Read side of the append-only ledger. All queries match rows where the
/// card is either the sender or the recipient, windowed on creation time.
#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_by_card_within(
        &self,
        card_id: i64,
        lower_bound: DateTime<Utc>,
        upper_bound: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;

    async fn find_all_by_card_within(
        &self,
        card_id: i64,
        lower_bound: DateTime<Utc>,
        upper_bound: DateTime<Utc>,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;

    async fn count_by_card_within(
        &self,
        card_id: i64,
        lower_bound: DateTime<Utc>,
        upper_bound: DateTime<Utc>,
    ) -> Result<i64, RepositoryError>;
}
