use crate::limiter::{MAX_SPENDS_PER_MINUTE, SpendRateLimiter};
use crate::service::{DynCardIntegration, DynTransactionIntegration};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{
    domain::enums::TransactionType,
    domain::requests::{BalanceOperationRequest, CreateTransactionRequest},
    errors::{ServiceError, format_validation_errors},
    utils::mask_card_number,
};
use std::sync::Arc;
use tracing::{error, info, instrument};
use validator::Validate;

pub type DynCardAggregateService = Arc<dyn CardAggregateServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardAggregateServiceTrait {
    async fn balance_operation(&self, req: &BalanceOperationRequest) -> Result<(), ServiceError>;

    async fn spend(&self, card_number: &str, amount: Decimal) -> Result<Decimal, ServiceError>;

    async fn topup(&self, card_number: &str, amount: Decimal) -> Result<Decimal, ServiceError>;
}

/// Orchestrates multi-card money movements as a saga of HTTP calls against
/// the card and transaction services.
///
/// The write sequence (sender balance, recipient balance, ledger entry) is
/// strictly ordered and carries no compensation: a failure mid-sequence
/// leaves earlier writes in place and only returns the rate-limit admission.
pub struct CardAggregateService {
    cards: DynCardIntegration,
    transactions: DynTransactionIntegration,
    limiter: Arc<SpendRateLimiter>,
}

impl CardAggregateService {
    pub fn new(
        cards: DynCardIntegration,
        transactions: DynTransactionIntegration,
        limiter: Arc<SpendRateLimiter>,
    ) -> Self {
        Self {
            cards,
            transactions,
            limiter,
        }
    }

    fn rate_limit_message(card_number: &str) -> String {
        format!("Max {MAX_SPENDS_PER_MINUTE} spends per minute exceeded for card {card_number}")
    }

    async fn fetch_sender(
        &self,
        card_number: &str,
        amount: Decimal,
    ) -> Result<shared::domain::responses::CardResponse, ServiceError> {
        self.cards
            .fetch_covered_card(card_number, amount)
            .await
            .map_err(|e| match e {
                ServiceError::NotFound(_) => ServiceError::NotFound(format!(
                    "Sender card number: {card_number} not found, blocked or insufficient balance"
                )),
                other => other,
            })
    }

    async fn fetch_recipient(
        &self,
        card_number: &str,
    ) -> Result<shared::domain::responses::CardResponse, ServiceError> {
        self.cards
            .fetch_valid_card(card_number)
            .await
            .map_err(|e| match e {
                ServiceError::NotFound(_) => ServiceError::NotFound(format!(
                    "Recipient card number: {card_number} not found"
                )),
                other => other,
            })
    }

    async fn transfer_steps(&self, req: &BalanceOperationRequest) -> Result<(), ServiceError> {
        let (sender_card, recipient_card) = tokio::try_join!(
            self.fetch_sender(&req.sender_card_number, req.amount),
            self.fetch_recipient(&req.recipient_card_number),
        )?;

        let new_sender_balance = sender_card.balance - req.amount;
        let new_recipient_balance = recipient_card.balance + req.amount;

        self.cards
            .update_balance(sender_card.id, new_sender_balance)
            .await?;
        self.cards
            .update_balance(recipient_card.id, new_recipient_balance)
            .await?;
        self.transactions
            .create_transaction(&CreateTransactionRequest {
                sender_card_id: sender_card.id,
                recipient_card_id: recipient_card.id,
                amount: req.amount,
                transaction_type: TransactionType::Transfer,
            })
            .await?;

        Ok(())
    }

    async fn spend_steps(
        &self,
        card_number: &str,
        amount: Decimal,
    ) -> Result<Decimal, ServiceError> {
        let card = self
            .cards
            .fetch_covered_card(card_number, amount)
            .await
            .map_err(|e| match e {
                ServiceError::NotFound(_) => ServiceError::NotFound(format!(
                    "Card number: {card_number} not found, blocked or insufficient balance"
                )),
                other => other,
            })?;

        let new_balance = card.balance - amount;

        self.cards.update_balance(card.id, new_balance).await?;
        self.transactions
            .create_transaction(&CreateTransactionRequest {
                sender_card_id: card.id,
                recipient_card_id: card.id,
                amount,
                transaction_type: TransactionType::Spend,
            })
            .await?;

        Ok(new_balance)
    }
}

#[async_trait]
impl CardAggregateServiceTrait for CardAggregateService {
    #[instrument(skip(self, req), level = "info")]
    async fn balance_operation(&self, req: &BalanceOperationRequest) -> Result<(), ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("validation failed: {error_msg}");
            return Err(ServiceError::InvalidInput(error_msg));
        }

        let sender = &req.sender_card_number;
        let masked_sender = mask_card_number(sender);
        let masked_recipient = mask_card_number(&req.recipient_card_number);

        if !self.limiter.allow(sender) {
            return Err(ServiceError::RateLimitExceeded(Self::rate_limit_message(
                sender,
            )));
        }

        info!(
            "transferring {} from {masked_sender} to {masked_recipient}",
            req.amount
        );

        let result = self.transfer_steps(req).await;

        if let Err(e) = &result {
            // failed attempts do not consume the admission
            self.limiter.rollback(sender);
            error!("transfer from {masked_sender} to {masked_recipient} failed: {e}");
        } else {
            info!("transfer from {masked_sender} to {masked_recipient} completed");
        }

        result
    }

    #[instrument(skip(self, card_number), level = "info")]
    async fn spend(&self, card_number: &str, amount: Decimal) -> Result<Decimal, ServiceError> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::InvalidInput("amount must be positive".into()));
        }

        let masked = mask_card_number(card_number);

        if !self.limiter.allow(card_number) {
            return Err(ServiceError::RateLimitExceeded(Self::rate_limit_message(
                card_number,
            )));
        }

        info!("spending {amount} from card {masked}");

        let result = self.spend_steps(card_number, amount).await;

        if let Err(e) = &result {
            self.limiter.rollback(card_number);
            error!("spend from card {masked} failed: {e}");
        }

        result
    }

    #[instrument(skip(self, card_number), level = "info")]
    async fn topup(&self, card_number: &str, amount: Decimal) -> Result<Decimal, ServiceError> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::InvalidInput("amount must be positive".into()));
        }

        let masked = mask_card_number(card_number);
        info!("topping up card {masked} with {amount}");

        // topups are credits and deliberately bypass the spend limiter
        let card = self
            .cards
            .fetch_valid_card(card_number)
            .await
            .map_err(|e| match e {
                ServiceError::NotFound(_) => {
                    ServiceError::NotFound(format!("Card number: {card_number} not found"))
                }
                other => other,
            })?;

        let new_balance = card.balance + amount;

        self.cards.update_balance(card.id, new_balance).await?;
        self.transactions
            .create_transaction(&CreateTransactionRequest {
                sender_card_id: card.id,
                recipient_card_id: card.id,
                amount,
                transaction_type: TransactionType::Topup,
            })
            .await?;

        Ok(new_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{CardIntegrationTrait, TransactionIntegrationTrait};
    use chrono::Utc;
    use shared::domain::enums::CardStatus;
    use shared::domain::responses::CardResponse;
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn card(id: i64, code: &str, balance: &str) -> CardResponse {
        CardResponse {
            id,
            user_id: 10,
            code: code.into(),
            balance: Decimal::from_str(balance).unwrap(),
            created_at: Utc::now(),
            status: CardStatus::Active,
            version: 1,
            cvc: Some("123".into()),
            expiration_date: Some("2030-01".into()),
        }
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[derive(Default)]
    struct MockCards {
        cards: HashMap<String, CardResponse>,
        fetches: AtomicUsize,
        update_calls: Mutex<Vec<(i64, Decimal)>>,
        // 1-based index of the update call that fails with a 500
        fail_update_at: Option<usize>,
    }

    impl MockCards {
        fn with_cards(cards: Vec<CardResponse>) -> Self {
            Self {
                cards: cards.into_iter().map(|c| (c.code.clone(), c)).collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl CardIntegrationTrait for MockCards {
        async fn fetch_valid_card(
            &self,
            card_number: &str,
        ) -> Result<CardResponse, ServiceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.cards
                .get(card_number)
                .cloned()
                .ok_or_else(|| ServiceError::NotFound(format!("Card number: {card_number} not found")))
        }

        async fn fetch_covered_card(
            &self,
            card_number: &str,
            amount: Decimal,
        ) -> Result<CardResponse, ServiceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.cards
                .get(card_number)
                .filter(|c| c.balance >= amount)
                .cloned()
                .ok_or_else(|| {
                    ServiceError::NotFound(format!(
                        "Card number: {card_number} not found, blocked or insufficient balance"
                    ))
                })
        }

        async fn update_balance(
            &self,
            card_id: i64,
            new_balance: Decimal,
        ) -> Result<(), ServiceError> {
            let mut calls = self.update_calls.lock().unwrap();
            calls.push((card_id, new_balance));
            if self.fail_update_at == Some(calls.len()) {
                return Err(ServiceError::Upstream {
                    status: 500,
                    body: "boom".into(),
                });
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockLedger {
        created: Mutex<Vec<CreateTransactionRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl TransactionIntegrationTrait for MockLedger {
        async fn create_transaction(
            &self,
            req: &CreateTransactionRequest,
        ) -> Result<(), ServiceError> {
            if self.fail {
                return Err(ServiceError::Upstream {
                    status: 500,
                    body: "ledger down".into(),
                });
            }
            self.created.lock().unwrap().push(req.clone());
            Ok(())
        }
    }

    fn transfer_request(amount: &str) -> BalanceOperationRequest {
        BalanceOperationRequest {
            sender_card_number: "4000000000000001".into(),
            recipient_card_number: "4000000000000002".into(),
            amount: dec(amount),
            transaction_type: TransactionType::Transfer,
        }
    }

    fn two_cards() -> Vec<CardResponse> {
        vec![
            card(1, "4000000000000001", "100"),
            card(2, "4000000000000002", "200"),
        ]
    }

    struct Harness {
        cards: Arc<MockCards>,
        ledger: Arc<MockLedger>,
        limiter: Arc<SpendRateLimiter>,
        service: CardAggregateService,
    }

    fn harness(cards: MockCards, ledger: MockLedger) -> Harness {
        let cards = Arc::new(cards);
        let ledger = Arc::new(ledger);
        let limiter = Arc::new(SpendRateLimiter::new());
        let service = CardAggregateService::new(
            cards.clone() as DynCardIntegration,
            ledger.clone() as DynTransactionIntegration,
            limiter.clone(),
        );
        Harness {
            cards,
            ledger,
            limiter,
            service,
        }
    }

    #[tokio::test]
    async fn transfer_debits_credits_and_records_one_entry() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        h.service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap();

        let updates = h.cards.update_calls.lock().unwrap();
        assert_eq!(updates.as_slice(), &[(1, dec("50")), (2, dec("250"))]);

        let created = h.ledger.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].sender_card_id, 1);
        assert_eq!(created[0].recipient_card_id, 2);
        assert_eq!(created[0].amount, dec("50"));
        assert_eq!(created[0].transaction_type, TransactionType::Transfer);
    }

    #[tokio::test]
    async fn failed_balance_write_aborts_and_rolls_back_the_admission() {
        let h = harness(
            MockCards {
                fail_update_at: Some(2),
                ..MockCards::with_cards(two_cards())
            },
            MockLedger::default(),
        );

        let err = h
            .service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Upstream { status: 500, .. }));

        // ledger write never attempted
        assert!(h.ledger.created.lock().unwrap().is_empty());

        // the failed attempt returned its admission: five fresh ones remain
        for _ in 0..5 {
            assert!(h.limiter.allow("4000000000000001"));
        }
        assert!(!h.limiter.allow("4000000000000001"));
    }

    #[tokio::test]
    async fn failed_ledger_write_fails_the_operation_without_compensation() {
        let h = harness(
            MockCards::with_cards(two_cards()),
            MockLedger {
                fail: true,
                ..Default::default()
            },
        );

        let err = h
            .service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Upstream { status: 500, .. }));

        // both balance writes already happened and stay in place
        assert_eq!(h.cards.update_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_sender_collapses_into_one_message() {
        let h = harness(
            MockCards::with_cards(vec![card(2, "4000000000000002", "200")]),
            MockLedger::default(),
        );

        let err = h
            .service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap_err();
        match err {
            ServiceError::NotFound(msg) => {
                assert!(msg.contains("Sender card number"));
                assert!(msg.contains("not found, blocked or insufficient balance"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(h.cards.update_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unaffordable_sender_is_reported_the_same_as_missing() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        let err = h
            .service
            .balance_operation(&transfer_request("100.01"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_recipient_has_its_own_message() {
        let h = harness(
            MockCards::with_cards(vec![card(1, "4000000000000001", "100")]),
            MockLedger::default(),
        );

        let err = h
            .service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap_err();
        match err {
            ServiceError::NotFound(msg) => {
                assert!(msg.starts_with("Recipient card number"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_admission_issues_no_network_calls() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        for _ in 0..5 {
            assert!(h.limiter.allow("4000000000000001"));
        }

        let err = h
            .service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RateLimitExceeded(_)));
        assert_eq!(h.cards.fetches.load(Ordering::SeqCst), 0);

        // a rejected attempt is not rolled back either
        let err = h
            .service
            .balance_operation(&transfer_request("50"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RateLimitExceeded(_)));
    }

    #[tokio::test]
    async fn invalid_amount_is_rejected_before_admission() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        let err = h
            .service
            .balance_operation(&transfer_request("0"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(h.cards.fetches.load(Ordering::SeqCst), 0);

        // the rejected request consumed no admission
        for _ in 0..5 {
            assert!(h.limiter.allow("4000000000000001"));
        }
    }

    #[tokio::test]
    async fn spend_debits_and_returns_the_new_balance() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        let new_balance = h
            .service
            .spend("4000000000000001", dec("30"))
            .await
            .unwrap();
        assert_eq!(new_balance, dec("70"));

        let created = h.ledger.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].sender_card_id, 1);
        assert_eq!(created[0].recipient_card_id, 1);
        assert_eq!(created[0].transaction_type, TransactionType::Spend);
    }

    #[tokio::test]
    async fn spend_is_rate_limited() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        for _ in 0..5 {
            h.service.spend("4000000000000001", dec("1")).await.unwrap();
        }

        let err = h
            .service
            .spend("4000000000000001", dec("1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RateLimitExceeded(_)));
    }

    #[tokio::test]
    async fn topup_bypasses_the_limiter_and_credits() {
        let h = harness(MockCards::with_cards(two_cards()), MockLedger::default());

        // exhaust the spend budget for this card first
        for _ in 0..6 {
            h.limiter.allow("4000000000000001");
        }

        let new_balance = h
            .service
            .topup("4000000000000001", dec("25"))
            .await
            .unwrap();
        assert_eq!(new_balance, dec("125"));

        let created = h.ledger.created.lock().unwrap();
        assert_eq!(created[0].transaction_type, TransactionType::Topup);
    }

    #[tokio::test]
    async fn topup_of_missing_card_is_not_found() {
        let h = harness(MockCards::default(), MockLedger::default());

        let err = h
            .service
            .topup("4000000000000009", dec("25"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
