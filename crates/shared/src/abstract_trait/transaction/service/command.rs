use crate::{
    domain::requests::CreateTransactionRequest, domain::responses::TransactionResponse,
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandService = Arc<dyn TransactionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionResponse, ServiceError>;
}
