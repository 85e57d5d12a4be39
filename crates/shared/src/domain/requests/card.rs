use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 12, max = 19, message = "card number must be 12-19 digits"))]
    pub card_number: String,

    /// Expiration month, "YYYY-MM".
    #[validate(length(equal = 7, message = "expiration must be formatted as YYYY-MM"))]
    pub expiration: String,

    #[validate(length(min = 3, max = 4, message = "cvc must be 3 or 4 digits"))]
    pub cvc: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBalanceRequest {
    pub new_balance: Decimal,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CoveredCardQuery {
    pub amount: Decimal,
}
