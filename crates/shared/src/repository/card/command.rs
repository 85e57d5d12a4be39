use crate::{
    abstract_trait::card::repository::command::{CardCommandRepositoryTrait, NewCard},
    config::ConnectionPool,
    errors::RepositoryError,
    model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::error;

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
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
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn insert(&self, card: &NewCard) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let inserted = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards (
                user_id,
                card_number,
                balance,
                status,
                version,
                cvc,
                expiration_date,
                created_at
            )
            VALUES ($1, $2, 0, $3, 0, $4, $5, NOW())
            RETURNING
                card_id,
                user_id,
                card_number,
                balance,
                status,
                version,
                cvc,
                expiration_date,
                created_at,
                updated_at
            "#,
        )
        .bind(card.user_id)
        .bind(&card.card_number)
        .bind(card.status.as_str())
        .bind(&card.cvc)
        .bind(&card.expiration)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                error!("card number already exists");
                RepositoryError::Conflict("card number already exists".into())
            }
            _ => {
                error!("failed to insert card: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(inserted)
    }

    async fn update_balance(
        &self,
        card_id: i64,
        new_balance: Decimal,
        expected_version: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE cards
            SET balance = $2, version = version + 1, updated_at = NOW()
            WHERE card_id = $1 AND version = $3
            "#,
        )
        .bind(card_id)
        .bind(new_balance)
        .bind(expected_version)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to update balance for card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        if result.rows_affected() == 0 {
            // Distinguish a stale version from a missing row.
            let exists = sqlx::query_scalar::<_, i64>("SELECT card_id FROM cards WHERE card_id = $1")
                .bind(card_id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|e| {
                    error!("failed to re-check card {card_id}: {e:?}");
                    RepositoryError::Sqlx(e)
                })?;

            return Err(match exists {
                Some(_) => {
                    error!(
                        "version conflict updating card {card_id}: expected version {expected_version}"
                    );
                    RepositoryError::Conflict(format!(
                        "card {card_id} was modified concurrently"
                    ))
                }
                None => {
                    error!("card {card_id} not found");
                    RepositoryError::NotFound
                }
            });
        }

        Ok(())
    }
}
