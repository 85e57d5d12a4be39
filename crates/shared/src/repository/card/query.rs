use crate::{
    abstract_trait::card::repository::query::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

const CARD_COLUMNS: &str = "card_id, user_id, card_number, balance, status, version, cvc, \
                            expiration_date, created_at, updated_at";

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
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
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_number = $1"
        ))
        .bind(card_number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to fetch card by number: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn find_by_id(&self, card_id: i64) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_id = $1"
        ))
        .bind(card_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to fetch card {card_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn find_all_by_user_id(&self, user_id: i64) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let cards = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to fetch cards for user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(cards)
    }
}
