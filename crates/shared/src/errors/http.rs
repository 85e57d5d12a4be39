use crate::errors::{ErrorResponse, RepositoryError, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            ServiceError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),

            ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),

            ServiceError::RateLimitExceeded(msg) => {
                warn!("rate limit exceeded: {msg}");
                // 429 carries the raw message text, not the JSON envelope
                return (StatusCode::TOO_MANY_REQUESTS, msg).into_response();
            }

            ServiceError::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body,
            ),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::Conflict(msg) => (StatusCode::CONFLICT, msg),
                RepositoryError::Sqlx(err) => {
                    error!("database error: {err:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Internal(msg) => {
                error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        if status.is_server_error() {
            error!("request failed with {status}: {msg}");
        } else {
            warn!("request rejected with {status}: {msg}");
        }

        (status, Json(ErrorResponse { error: msg })).into_response()
    }
}
