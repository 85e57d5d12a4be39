use crate::domain::enums::CardStatus;
use crate::model::card::CardModel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: i64,
    pub user_id: i64,
    pub code: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub status: CardStatus,
    pub version: i32,
    pub cvc: Option<String>,
    pub expiration_date: Option<String>,
}

impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            id: model.card_id,
            user_id: model.user_id,
            code: model.card_number,
            balance: model.balance,
            created_at: model.created_at,
            // unknown status values are treated as blocked
            status: CardStatus::from_value(&model.status).unwrap_or(CardStatus::Blocked),
            version: model.version,
            cvc: model.cvc,
            expiration_date: model.expiration_date,
        }
    }
}
