mod card;
mod transaction;
mod transfer;

pub use self::card::{CoveredCardQuery, CreateCardRequest, UpdateBalanceRequest};
pub use self::transaction::{CreateTransactionRequest, FindTransactionsQuery};
pub use self::transfer::BalanceOperationRequest;

use rust_decimal::Decimal;
use validator::ValidationError;

pub(crate) fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut err = ValidationError::new("amount");
        err.message = Some("amount must be positive".into());
        return Err(err);
    }
    Ok(())
}
