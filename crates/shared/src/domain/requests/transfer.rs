use crate::domain::enums::TransactionType;
use crate::domain::requests::validate_positive_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceOperationRequest {
    #[validate(length(min = 1, message = "sender card number is required"))]
    pub sender_card_number: String,

    #[validate(length(min = 1, message = "recipient card number is required"))]
    pub recipient_card_number: String,

    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn deserializes_collaborator_wire_shape() {
        let req: BalanceOperationRequest = serde_json::from_str(
            r#"{
                "senderCardNumber": "4000000000000001",
                "recipientCardNumber": "4000000000000002",
                "amount": 50.00,
                "type": "TRANSFER"
            }"#,
        )
        .unwrap();
        assert_eq!(req.sender_card_number, "4000000000000001");
        assert_eq!(req.amount, Decimal::new(5000, 2));
        assert_eq!(req.transaction_type, TransactionType::Transfer);
    }

    #[test]
    fn rejects_non_positive_amount() {
        let req = BalanceOperationRequest {
            sender_card_number: "4000000000000001".into(),
            recipient_card_number: "4000000000000002".into(),
            amount: Decimal::ZERO,
            transaction_type: TransactionType::Transfer,
        };
        assert!(validator::Validate::validate(&req).is_err());
    }
}
