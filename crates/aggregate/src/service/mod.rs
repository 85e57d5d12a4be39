mod aggregate;
mod card;
mod transaction;

pub use self::aggregate::{
    CardAggregateService, CardAggregateServiceTrait, DynCardAggregateService,
};
pub use self::card::{CardHttpClientService, CardIntegrationTrait, DynCardIntegration};
pub use self::transaction::{
    DynTransactionIntegration, TransactionHttpClientService, TransactionIntegrationTrait,
};
