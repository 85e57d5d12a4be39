use crate::{domain::responses::UserResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryClient = Arc<dyn UserQueryClientTrait + Send + Sync>;

/// Ownership lookup against the external user service.
#[async_trait]
pub trait UserQueryClientTrait {
    async fn find_by_username(&self, username: &str) -> Result<UserResponse, ServiceError>;
}
