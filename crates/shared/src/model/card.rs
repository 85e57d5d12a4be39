use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub card_id: i64,
    pub user_id: i64,
    pub card_number: String,
    pub balance: Decimal,
    pub status: String,
    pub version: i32,
    pub cvc: Option<String>,
    pub expiration_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
