use crate::{
    abstract_trait::transaction::repository::query::DynTransactionQueryRepository,
    abstract_trait::transaction::service::query::TransactionQueryServiceTrait,
    domain::requests::FindTransactionsQuery,
    domain::responses::{PagedTransactionResponse, PaginationMetadata, TransactionResponse},
    errors::ServiceError,
    utils::{current_month_bounds, min_query_instant},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument};

pub struct TransactionQueryService {
    query: DynTransactionQueryRepository,
}

impl TransactionQueryService {
    pub fn new(query: DynTransactionQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    #[instrument(skip(self, query), level = "info")]
    async fn find_by_card(
        &self,
        card_id: i64,
        query: &FindTransactionsQuery,
    ) -> Result<PagedTransactionResponse, ServiceError> {
        if query.page < 0 || query.size < 1 {
            error!(
                "rejecting transaction query for card {card_id}: page {}, size {}",
                query.page, query.size
            );
            return Err(ServiceError::InvalidInput(
                "page must be >= 0 and size must be >= 1".into(),
            ));
        }

        let lower_bound = query.lower_bound_date.unwrap_or_else(min_query_instant);
        let upper_bound = query.upper_bound_date.unwrap_or_else(Utc::now);
        let offset = i64::from(query.page) * i64::from(query.size);

        let rows = self
            .query
            .find_by_card_within(
                card_id,
                lower_bound,
                upper_bound,
                offset,
                i64::from(query.size),
            )
            .await?;
        let total = self
            .query
            .count_by_card_within(card_id, lower_bound, upper_bound)
            .await?;

        info!(
            "fetched {} of {total} transactions for card {card_id}, page {}",
            rows.len(),
            query.page
        );

        Ok(PagedTransactionResponse {
            transactions: rows.into_iter().map(Into::into).collect(),
            metadata: PaginationMetadata::from_counts(query.page, query.size, total),
        })
    }

    #[instrument(skip(self), level = "info")]
    async fn find_current_month(
        &self,
        card_id: i64,
    ) -> Result<Vec<TransactionResponse>, ServiceError> {
        let (lower_bound, upper_bound) = current_month_bounds();

        let rows = self
            .query
            .find_all_by_card_within(card_id, lower_bound, upper_bound)
            .await?;

        info!(
            "fetched {} current-month transactions for card {card_id}",
            rows.len()
        );
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
        errors::RepositoryError, model::transaction::TransactionModel,
    };
    use chrono::{DateTime, Duration};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct StubLedger {
        rows: Vec<TransactionModel>,
        queries_issued: AtomicUsize,
    }

    impl StubLedger {
        fn new(rows: Vec<TransactionModel>) -> Self {
            Self {
                rows,
                queries_issued: AtomicUsize::new(0),
            }
        }

        fn matching(
            &self,
            card_id: i64,
            lower: DateTime<Utc>,
            upper: DateTime<Utc>,
        ) -> Vec<TransactionModel> {
            self.rows
                .iter()
                .filter(|t| {
                    (t.sender_card_id == card_id || t.recipient_card_id == card_id)
                        && t.created_at >= lower
                        && t.created_at <= upper
                })
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl TransactionQueryRepositoryTrait for StubLedger {
        async fn find_by_card_within(
            &self,
            card_id: i64,
            lower_bound: DateTime<Utc>,
            upper_bound: DateTime<Utc>,
            offset: i64,
            limit: i64,
        ) -> Result<Vec<TransactionModel>, RepositoryError> {
            self.queries_issued.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .matching(card_id, lower_bound, upper_bound)
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect())
        }

        async fn find_all_by_card_within(
            &self,
            card_id: i64,
            lower_bound: DateTime<Utc>,
            upper_bound: DateTime<Utc>,
        ) -> Result<Vec<TransactionModel>, RepositoryError> {
            self.queries_issued.fetch_add(1, Ordering::SeqCst);
            Ok(self.matching(card_id, lower_bound, upper_bound))
        }

        async fn count_by_card_within(
            &self,
            card_id: i64,
            lower_bound: DateTime<Utc>,
            upper_bound: DateTime<Utc>,
        ) -> Result<i64, RepositoryError> {
            self.queries_issued.fetch_add(1, Ordering::SeqCst);
            Ok(self.matching(card_id, lower_bound, upper_bound).len() as i64)
        }
    }

    fn row(id: i64, card_id: i64, minutes_ago: i64) -> TransactionModel {
        TransactionModel {
            transaction_id: id,
            code: format!("code-{id}"),
            sender_card_id: card_id,
            recipient_card_id: 99,
            transaction_type: "TRANSFER".into(),
            amount: Decimal::from_str("10").unwrap(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn negative_page_fails_fast_without_touching_the_ledger() {
        let ledger = Arc::new(StubLedger::new(vec![]));
        let svc = TransactionQueryService::new(ledger.clone());

        let query = FindTransactionsQuery {
            page: -1,
            ..Default::default()
        };
        let err = svc.find_by_card(1, &query).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(ledger.queries_issued.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn zero_page_size_fails_fast_without_touching_the_ledger() {
        let ledger = Arc::new(StubLedger::new(vec![]));
        let svc = TransactionQueryService::new(ledger.clone());

        let query = FindTransactionsQuery {
            size: 0,
            ..Default::default()
        };
        let err = svc.find_by_card(1, &query).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(ledger.queries_issued.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn pages_of_two_over_five_rows() {
        let rows = (1..=5).map(|i| row(i, 1, i)).collect();
        let svc = TransactionQueryService::new(Arc::new(StubLedger::new(rows)));

        let first = svc
            .find_by_card(
                1,
                &FindTransactionsQuery {
                    size: 2,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(first.transactions.len(), 2);
        assert_eq!(first.metadata.total_elements, 5);
        assert_eq!(first.metadata.total_pages, 3);
        assert!(first.metadata.has_next);
        assert!(!first.metadata.has_previous);

        let last = svc
            .find_by_card(
                1,
                &FindTransactionsQuery {
                    page: 2,
                    size: 2,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(last.transactions.len(), 1);
        assert!(!last.metadata.has_next);
        assert!(last.metadata.has_previous);
    }

    #[tokio::test]
    async fn empty_result_yields_zero_pages() {
        let svc = TransactionQueryService::new(Arc::new(StubLedger::new(vec![])));
        let page = svc
            .find_by_card(1, &FindTransactionsQuery::default())
            .await
            .unwrap();
        assert!(page.transactions.is_empty());
        assert_eq!(page.metadata.total_pages, 0);
        assert!(!page.metadata.has_next);
        assert!(!page.metadata.has_previous);
    }

    #[tokio::test]
    async fn time_window_bounds_are_applied() {
        let rows = vec![row(1, 1, 10), row(2, 1, 60 * 24 * 40)];
        let svc = TransactionQueryService::new(Arc::new(StubLedger::new(rows)));

        let query = FindTransactionsQuery {
            lower_bound_date: Some(Utc::now() - Duration::days(1)),
            ..Default::default()
        };
        let page = svc.find_by_card(1, &query).await.unwrap();
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.metadata.total_elements, 1);
    }

    #[tokio::test]
    async fn current_month_rows_only() {
        let (month_start, _) = current_month_bounds();
        let mut inside = row(1, 1, 0);
        inside.created_at = month_start + Duration::minutes(1);
        let mut outside = row(2, 1, 0);
        outside.created_at = month_start - Duration::days(1);

        let svc = TransactionQueryService::new(Arc::new(StubLedger::new(vec![inside, outside])));

        let current = svc.find_current_month(1).await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, 1);
    }
}
