use crate::{
    abstract_trait::{
        card::repository::query::DynCardQueryRepository,
        card::service::query::CardQueryServiceTrait, user::DynUserQueryClient,
    },
    domain::responses::CardResponse,
    errors::ServiceError,
    service::card::validator::CardValidator,
    utils::mask_card_number,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, instrument};

pub struct CardQueryService {
    query: DynCardQueryRepository,
    users: DynUserQueryClient,
    validator: CardValidator,
}

impl CardQueryService {
    pub fn new(query: DynCardQueryRepository, users: DynUserQueryClient) -> Self {
        Self {
            query,
            users,
            validator: CardValidator::new(),
        }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    #[instrument(skip(self, card_number), level = "info")]
    async fn find_card(&self, card_number: &str) -> Result<Option<CardResponse>, ServiceError> {
        let card = self.query.find_by_card_number(card_number).await?;
        Ok(card.map(Into::into))
    }

    #[instrument(skip(self, card_number), level = "info")]
    async fn find_valid_card(
        &self,
        card_number: &str,
    ) -> Result<Option<CardResponse>, ServiceError> {
        let Some(card) = self.query.find_by_card_number(card_number).await? else {
            return Ok(None);
        };

        if !self.validator.is_valid(&card) {
            return Ok(None);
        }

        Ok(Some(card.into()))
    }

    #[instrument(skip(self, card_number), level = "info")]
    async fn find_valid_covered_card(
        &self,
        card_number: &str,
        amount: Decimal,
    ) -> Result<Option<CardResponse>, ServiceError> {
        let Some(card) = self.query.find_by_card_number(card_number).await? else {
            return Ok(None);
        };

        if !self.validator.is_valid(&card) || !self.validator.can_afford(&card, amount) {
            return Ok(None);
        }

        Ok(Some(card.into()))
    }

    #[instrument(skip(self, username), level = "info")]
    async fn find_all_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<CardResponse>, ServiceError> {
        let user = self.users.find_by_username(username).await?;
        let cards = self.query.find_all_by_user_id(user.id).await?;

        info!(
            "found {} cards for user {username}: {:?}",
            cards.len(),
            cards
                .iter()
                .map(|c| mask_card_number(&c.card_number))
                .collect::<Vec<_>>()
        );
        Ok(cards.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{card::repository::query::CardQueryRepositoryTrait, user::UserQueryClientTrait},
        domain::responses::UserResponse,
        errors::RepositoryError,
        model::card::CardModel,
    };
    use chrono::Utc;
    use std::str::FromStr;
    use std::sync::Arc;

    struct StubCardRepo {
        cards: Vec<CardModel>,
    }

    #[async_trait]
    impl CardQueryRepositoryTrait for StubCardRepo {
        async fn find_by_card_number(
            &self,
            card_number: &str,
        ) -> Result<Option<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .iter()
                .find(|c| c.card_number == card_number)
                .cloned())
        }

        async fn find_by_id(&self, card_id: i64) -> Result<Option<CardModel>, RepositoryError> {
            Ok(self.cards.iter().find(|c| c.card_id == card_id).cloned())
        }

        async fn find_all_by_user_id(
            &self,
            user_id: i64,
        ) -> Result<Vec<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    struct StubUserClient;

    #[async_trait]
    impl UserQueryClientTrait for StubUserClient {
        async fn find_by_username(&self, username: &str) -> Result<UserResponse, ServiceError> {
            Ok(UserResponse {
                id: 10,
                username: username.to_string(),
                cardholder_name: "Card Holder".into(),
            })
        }
    }

    fn card(number: &str, status: &str, balance: &str) -> CardModel {
        CardModel {
            card_id: 1,
            user_id: 10,
            card_number: number.into(),
            balance: Decimal::from_str(balance).unwrap(),
            status: status.into(),
            version: 0,
            cvc: Some("123".into()),
            expiration_date: Some("2030-01".into()),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn service(cards: Vec<CardModel>) -> CardQueryService {
        CardQueryService::new(Arc::new(StubCardRepo { cards }), Arc::new(StubUserClient))
    }

    #[tokio::test]
    async fn valid_card_lookup_filters_blocked_cards() {
        let svc = service(vec![card("4000000000000001", "BLOCKED", "1000")]);
        let found = svc.find_valid_card("4000000000000001").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn covered_card_lookup_requires_sufficient_balance() {
        let svc = service(vec![card("4000000000000001", "ACTIVE", "100")]);

        let covered = svc
            .find_valid_covered_card("4000000000000001", Decimal::from_str("50").unwrap())
            .await
            .unwrap();
        assert!(covered.is_some());

        let uncovered = svc
            .find_valid_covered_card("4000000000000001", Decimal::from_str("100.01").unwrap())
            .await
            .unwrap();
        assert!(uncovered.is_none());
    }

    #[tokio::test]
    async fn covered_card_lookup_filters_blocked_even_when_affordable() {
        let svc = service(vec![card("4000000000000001", "BLOCKED", "1000")]);
        let found = svc
            .find_valid_covered_card("4000000000000001", Decimal::from_str("1").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn missing_card_is_an_empty_result_not_an_error() {
        let svc = service(vec![]);
        assert!(svc.find_valid_card("4999").await.unwrap().is_none());
        assert!(svc.find_card("4999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cards_by_username_resolve_the_owner_first() {
        let svc = service(vec![
            card("4000000000000001", "ACTIVE", "10"),
            card("4000000000000002", "BLOCKED", "20"),
        ]);
        let cards = svc.find_all_by_username("alice").await.unwrap();
        assert_eq!(cards.len(), 2);
    }
}
