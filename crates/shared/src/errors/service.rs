use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    RateLimitExceeded(String),

    /// Unexpected non-2xx from a peer service, propagated with the status
    /// the peer returned.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("internal error: {0}")]
    Internal(String),
}
