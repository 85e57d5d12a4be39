use crate::domain::enums::TransactionType;
use crate::domain::responses::PaginationMetadata;
use crate::model::transaction::TransactionModel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub code: String,
    pub sender_card_id: i64,
    pub recipient_card_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.transaction_id,
            code: model.code,
            sender_card_id: model.sender_card_id,
            recipient_card_id: model.recipient_card_id,
            transaction_type: TransactionType::from_value(&model.transaction_type)
                .unwrap_or(TransactionType::Transfer),
            amount: model.amount,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedTransactionResponse {
    pub transactions: Vec<TransactionResponse>,
    pub metadata: PaginationMetadata,
}
