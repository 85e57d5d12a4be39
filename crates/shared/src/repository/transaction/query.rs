use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::error;

const TRANSACTION_COLUMNS: &str = "transaction_id, code, sender_card_id, recipient_card_id, \
                                   transaction_type, amount, created_at";

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_by_card_within(
        &self,
        card_id: i64,
        lower_bound: DateTime<Utc>,
        upper_bound: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, TransactionModel>(&format!(
            r#"
            SELECT {TRANSACTION_COLUMNS}
            FROM transactions
            WHERE (sender_card_id = $1 OR recipient_card_id = $1)
              AND created_at >= $2
              AND created_at <= $3
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#
        ))
        .bind(card_id)
        .bind(lower_bound)
        .bind(upper_bound)
        .bind(offset)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to fetch transactions for card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(rows)
    }

    async fn find_all_by_card_within(
        &self,
        card_id: i64,
        lower_bound: DateTime<Utc>,
        upper_bound: DateTime<Utc>,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, TransactionModel>(&format!(
            r#"
            SELECT {TRANSACTION_COLUMNS}
            FROM transactions
            WHERE (sender_card_id = $1 OR recipient_card_id = $1)
              AND created_at >= $2
              AND created_at <= $3
            ORDER BY created_at DESC
            "#
        ))
        .bind(card_id)
        .bind(lower_bound)
        .bind(upper_bound)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to fetch transactions for card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(rows)
    }

    async fn count_by_card_within(
        &self,
        card_id: i64,
        lower_bound: DateTime<Utc>,
        upper_bound: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE (sender_card_id = $1 OR recipient_card_id = $1)
              AND created_at >= $2
              AND created_at <= $3
            "#,
        )
        .bind(card_id)
        .bind(lower_bound)
        .bind(upper_bound)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to count transactions for card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(total)
    }
}
