use crate::errors::ServiceError;
use reqwest::StatusCode;
use tracing::{error, warn};

/// Classifies a non-2xx peer response into the domain error taxonomy.
///
/// 404 and 422 map to NotFound and InvalidInput carrying the response body;
/// every other status is logged with its body and propagated unchanged as an
/// upstream error.
pub async fn error_from_response(response: reqwest::Response) -> ServiceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::NOT_FOUND => ServiceError::NotFound(body),
        StatusCode::UNPROCESSABLE_ENTITY => ServiceError::InvalidInput(body),
        _ => {
            error!("Got an unexpected HTTP error: {status}, will rethrow it");
            error!("Error body: {body}");
            ServiceError::Upstream {
                status: status.as_u16(),
                body,
            }
        }
    }
}

/// Wraps a transport-level failure (connect, timeout, body read) that never
/// produced an HTTP status.
pub fn transport_error(err: reqwest::Error) -> ServiceError {
    warn!("HTTP call failed before a response was received: {err}");
    ServiceError::Internal(err.to_string())
}
