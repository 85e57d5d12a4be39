use crate::{domain::enums::CardStatus, model::card::CardModel, utils::mask_card_number};
use rust_decimal::Decimal;
use tracing::debug;

/// Pure eligibility predicates over a card snapshot. Both are fail-closed:
/// a rejecting branch logs a debug trace and returns false, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidator;

impl CardValidator {
    pub fn new() -> Self {
        Self
    }

    /// False iff the card is BLOCKED.
    pub fn is_valid(&self, card: &CardModel) -> bool {
        if card.status == CardStatus::Blocked.as_str() {
            debug!(
                "card {} is blocked",
                mask_card_number(&card.card_number)
            );
            return false;
        }
        true
    }

    /// True iff `balance >= amount`, compared exactly with no tolerance.
    pub fn can_afford(&self, card: &CardModel, amount: Decimal) -> bool {
        if card.balance < amount {
            debug!(
                "insufficient balance for card {}: balance {}, charge {}",
                mask_card_number(&card.card_number),
                card.balance,
                amount
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn card(status: &str, balance: &str) -> CardModel {
        CardModel {
            card_id: 1,
            user_id: 10,
            card_number: "4000000000000001".into(),
            balance: Decimal::from_str(balance).unwrap(),
            status: status.into(),
            version: 0,
            cvc: Some("123".into()),
            expiration_date: Some("2030-01".into()),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn blocked_card_is_invalid_regardless_of_balance() {
        let validator = CardValidator::new();
        assert!(!validator.is_valid(&card("BLOCKED", "1000000")));
        assert!(validator.is_valid(&card("ACTIVE", "0")));
    }

    #[test]
    fn equal_balance_affords_the_amount() {
        let validator = CardValidator::new();
        let c = card("ACTIVE", "50");
        assert!(validator.can_afford(&c, Decimal::from_str("50").unwrap()));
        assert!(validator.can_afford(&c, Decimal::from_str("50.00").unwrap()));
    }

    #[test]
    fn comparison_is_exact_with_no_tolerance() {
        let validator = CardValidator::new();
        let c = card("ACTIVE", "49.9999");
        assert!(!validator.can_afford(&c, Decimal::from_str("50").unwrap()));
        assert!(validator.can_afford(&c, Decimal::from_str("49.9999").unwrap()));
    }
}
