use crate::domain::enums::TransactionType;
use crate::domain::requests::validate_positive_amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub sender_card_id: i64,

    pub recipient_card_id: i64,

    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FindTransactionsQuery {
    #[serde(default)]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub size: i32,

    #[serde(default, rename = "upperBoundDate")]
    pub upper_bound_date: Option<DateTime<Utc>>,

    #[serde(default, rename = "lowerBoundDate")]
    pub lower_bound_date: Option<DateTime<Utc>>,
}

fn default_page_size() -> i32 {
    20
}

impl Default for FindTransactionsQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_page_size(),
            upper_bound_date: None,
            lower_bound_date: None,
        }
    }
}
