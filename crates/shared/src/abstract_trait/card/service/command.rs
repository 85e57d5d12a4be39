use crate::{domain::requests::CreateCardRequest, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynCardCommandService = Arc<dyn CardCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandServiceTrait {
    async fn create_card(&self, req: &CreateCardRequest) -> Result<(), ServiceError>;

    /// Reads the current row and re-writes the balance under its observed
    /// version; a concurrent writer surfaces as Conflict.
    async fn update_balance(
        &self,
        card_id: i64,
        new_balance: Decimal,
    ) -> Result<(), ServiceError>;
}
