use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::{abstract_trait::user::DynUserQueryClient, config::ConnectionPool};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(db: ConnectionPool, users: DynUserQueryClient) -> Result<Self> {
        let di_container = DependenciesInject::new(db, users)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
