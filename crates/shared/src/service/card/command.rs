use crate::{
    abstract_trait::{
        card::policy::DynCardActivationPolicy,
        card::repository::command::{DynCardCommandRepository, NewCard},
        card::repository::query::DynCardQueryRepository,
        card::service::command::CardCommandServiceTrait,
        user::DynUserQueryClient,
    },
    domain::requests::CreateCardRequest,
    errors::{RepositoryError, ServiceError, format_validation_errors},
    utils::mask_card_number,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{error, info, instrument};
use validator::Validate;

pub struct CardCommandService {
    users: DynUserQueryClient,
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
    policy: DynCardActivationPolicy,
}

impl CardCommandService {
    pub fn new(
        users: DynUserQueryClient,
        query: DynCardQueryRepository,
        command: DynCardCommandRepository,
        policy: DynCardActivationPolicy,
    ) -> Self {
        Self {
            users,
            query,
            command,
            policy,
        }
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    #[instrument(skip(self, req), level = "info")]
    async fn create_card(&self, req: &CreateCardRequest) -> Result<(), ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("validation failed: {error_msg}");
            return Err(ServiceError::InvalidInput(error_msg));
        }

        let user = self.users.find_by_username(&req.username).await?;

        let new_card = NewCard {
            user_id: user.id,
            card_number: req.card_number.clone(),
            expiration: req.expiration.clone(),
            cvc: req.cvc.clone(),
            status: self.policy.initial_status(),
        };

        let created = self.command.insert(&new_card).await?;

        info!(
            "created card {} for user {} with status {}",
            mask_card_number(&created.card_number),
            user.id,
            created.status
        );
        Ok(())
    }

    #[instrument(skip(self), level = "info")]
    async fn update_balance(
        &self,
        card_id: i64,
        new_balance: Decimal,
    ) -> Result<(), ServiceError> {
        if new_balance < Decimal::ZERO {
            return Err(ServiceError::InvalidInput(
                "new balance must not be negative".into(),
            ));
        }

        let card = self
            .query
            .find_by_id(card_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // CAS against the version observed in the read above; a concurrent
        // writer makes this fail with Conflict instead of silently clobbering.
        self.command
            .update_balance(card_id, new_balance, card.version)
            .await?;

        info!(
            "updated balance of card {} to {new_balance}",
            mask_card_number(&card.card_number)
        );
        Ok(())
    }
}
