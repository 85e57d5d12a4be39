use anyhow::Result;
use shared::{
    abstract_trait::{
        card::policy::DynCardActivationPolicy,
        card::repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
        card::service::{command::DynCardCommandService, query::DynCardQueryService},
        user::DynUserQueryClient,
    },
    config::ConnectionPool,
    repository::card::{command::CardCommandRepository, query::CardQueryRepository},
    service::card::{
        command::CardCommandService, policy::ImmediateActivationPolicy, query::CardQueryService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CardQueryDeps {
    pub query: DynCardQueryRepository,
    pub service: DynCardQueryService,
}

impl CardQueryDeps {
    pub fn new(db: ConnectionPool, users: DynUserQueryClient) -> Self {
        let query = Arc::new(CardQueryRepository::new(db)) as DynCardQueryRepository;
        let service =
            Arc::new(CardQueryService::new(query.clone(), users)) as DynCardQueryService;
        Self { query, service }
    }
}

#[derive(Clone)]
pub struct CardCommandDeps {
    pub command: DynCardCommandRepository,
    pub service: DynCardCommandService,
}

impl CardCommandDeps {
    pub fn new(
        db: ConnectionPool,
        query: DynCardQueryRepository,
        users: DynUserQueryClient,
    ) -> Self {
        let command = Arc::new(CardCommandRepository::new(db)) as DynCardCommandRepository;
        let policy = Arc::new(ImmediateActivationPolicy) as DynCardActivationPolicy;
        let service = Arc::new(CardCommandService::new(users, query, command.clone(), policy))
            as DynCardCommandService;
        Self { command, service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_query: CardQueryDeps,
    pub card_command: CardCommandDeps,
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, users: DynUserQueryClient) -> Result<Self> {
        let card_query = CardQueryDeps::new(db.clone(), users.clone());
        let card_command =
            CardCommandDeps::new(db, card_query.query.clone(), users);

        Ok(Self {
            card_query,
            card_command,
        })
    }
}
