use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub transaction_id: i64,
    pub code: String,
    pub sender_card_id: i64,
    pub recipient_card_id: i64,
    pub transaction_type: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}
