use crate::{
    abstract_trait::transaction::repository::command::DynTransactionCommandRepository,
    abstract_trait::transaction::service::command::TransactionCommandServiceTrait,
    domain::requests::CreateTransactionRequest,
    domain::responses::TransactionResponse,
    errors::{ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

pub struct TransactionCommandService {
    command: DynTransactionCommandRepository,
}

impl TransactionCommandService {
    pub fn new(command: DynTransactionCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    #[instrument(skip(self, req), level = "info")]
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionResponse, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("validation failed: {error_msg}");
            return Err(ServiceError::InvalidInput(error_msg));
        }

        let code = Uuid::new_v4().to_string();
        let record = self.command.insert(req, &code).await?;

        info!(
            "recorded {} of {} from card {} to card {}",
            record.transaction_type, record.amount, record.sender_card_id, record.recipient_card_id
        );
        Ok(record.into())
    }
}
