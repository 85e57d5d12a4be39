use crate::{
    domain::requests::CreateTransactionRequest, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandRepository =
    Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    /// Appends one immutable ledger row under the given unique code.
    async fn insert(
        &self,
        req: &CreateTransactionRequest,
        code: &str,
    ) -> Result<TransactionModel, RepositoryError>;
}
