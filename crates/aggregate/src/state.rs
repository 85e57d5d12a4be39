use crate::{
    config::ServerConfig,
    limiter::{SpendRateLimiter, SweeperHandle},
    service::{
        CardAggregateService, CardHttpClientService, DynCardAggregateService, DynCardIntegration,
        DynTransactionIntegration, TransactionHttpClientService,
    },
};
use anyhow::Result;
use std::sync::Arc;

pub struct AppState {
    pub aggregate_service: DynCardAggregateService,
    pub limiter: Arc<SpendRateLimiter>,
    // keeps the background sweep alive for the lifetime of the service
    _sweeper: SweeperHandle,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let cards = Arc::new(CardHttpClientService::new(
            &config.clients.card_service_base_url,
            config.clients.timeout_secs,
        )?) as DynCardIntegration;

        let transactions = Arc::new(TransactionHttpClientService::new(
            &config.clients.transaction_service_base_url,
            config.clients.timeout_secs,
        )?) as DynTransactionIntegration;

        let limiter = Arc::new(SpendRateLimiter::new());
        let sweeper = limiter.start_sweeper();

        let aggregate_service = Arc::new(CardAggregateService::new(
            cards,
            transactions,
            limiter.clone(),
        )) as DynCardAggregateService;

        Ok(Self {
            aggregate_service,
            limiter,
            _sweeper: sweeper,
        })
    }
}
