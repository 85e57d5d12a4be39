use anyhow::Result;
use shared::{
    abstract_trait::transaction::{
        repository::{
            command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
        },
        service::{command::DynTransactionCommandService, query::DynTransactionQueryService},
    },
    config::ConnectionPool,
    repository::transaction::{
        command::TransactionCommandRepository, query::TransactionQueryRepository,
    },
    service::transaction::{command::TransactionCommandService, query::TransactionQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct TransactionQueryDeps {
    pub query: DynTransactionQueryRepository,
    pub service: DynTransactionQueryService,
}

impl TransactionQueryDeps {
    pub fn new(db: ConnectionPool) -> Self {
        let query =
            Arc::new(TransactionQueryRepository::new(db)) as DynTransactionQueryRepository;
        let service =
            Arc::new(TransactionQueryService::new(query.clone())) as DynTransactionQueryService;
        Self { query, service }
    }
}

#[derive(Clone)]
pub struct TransactionCommandDeps {
    pub command: DynTransactionCommandRepository,
    pub service: DynTransactionCommandService,
}

impl TransactionCommandDeps {
    pub fn new(db: ConnectionPool) -> Self {
        let command =
            Arc::new(TransactionCommandRepository::new(db)) as DynTransactionCommandRepository;
        let service = Arc::new(TransactionCommandService::new(command.clone()))
            as DynTransactionCommandService;
        Self { command, service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub transaction_query: TransactionQueryDeps,
    pub transaction_command: TransactionCommandDeps,
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool) -> Result<Self> {
        let transaction_query = TransactionQueryDeps::new(db.clone());
        let transaction_command = TransactionCommandDeps::new(db);

        Ok(Self {
            transaction_query,
            transaction_command,
        })
    }
}
