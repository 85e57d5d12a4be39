use crate::{
    abstract_trait::transaction::repository::command::TransactionCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateTransactionRequest, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
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
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn insert(
        &self,
        req: &CreateTransactionRequest,
        code: &str,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let inserted = sqlx::query_as::<_, TransactionModel>(
            r#"
            INSERT INTO transactions (
                code,
                sender_card_id,
                recipient_card_id,
                transaction_type,
                amount,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING
                transaction_id,
                code,
                sender_card_id,
                recipient_card_id,
                transaction_type,
                amount,
                created_at
            "#,
        )
        .bind(code)
        .bind(req.sender_card_id)
        .bind(req.recipient_card_id)
        .bind(req.transaction_type.as_str())
        .bind(req.amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to insert transaction: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(inserted)
    }
}
