use crate::service::DynCardAggregateService;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use shared::{domain::requests::BalanceOperationRequest, errors::AppErrorHttp};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/cards-aggregate/balanceOperation",
    tag = "Aggregate",
    request_body = BalanceOperationRequest,
    responses(
        (status = 201, description = "Transfer completed"),
        (status = 404, description = "Sender or recipient not eligible"),
        (status = 422, description = "Malformed request"),
        (status = 429, description = "Spend rate limit exceeded")
    )
)]
pub async fn balance_operation(
    Extension(service): Extension<DynCardAggregateService>,
    Json(req): Json<BalanceOperationRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service.balance_operation(&req).await.map_err(AppErrorHttp)?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    post,
    path = "/cards-aggregate/{id}/spend",
    tag = "Aggregate",
    params(("id" = String, Path, description = "Card number")),
    request_body = Decimal,
    responses(
        (status = 201, description = "New balance", body = Decimal),
        (status = 404, description = "Card not eligible"),
        (status = 422, description = "Malformed amount"),
        (status = 429, description = "Spend rate limit exceeded")
    )
)]
pub async fn spend(
    Extension(service): Extension<DynCardAggregateService>,
    Path(card_number): Path<String>,
    Json(amount): Json<Decimal>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let new_balance = service
        .spend(&card_number, amount)
        .await
        .map_err(AppErrorHttp)?;
    Ok((StatusCode::CREATED, Json(new_balance)))
}

#[utoipa::path(
    post,
    path = "/cards-aggregate/{id}/topup",
    tag = "Aggregate",
    params(("id" = String, Path, description = "Card number")),
    request_body = Decimal,
    responses(
        (status = 201, description = "New balance", body = Decimal),
        (status = 404, description = "Card not found or blocked"),
        (status = 422, description = "Malformed amount")
    )
)]
pub async fn topup(
    Extension(service): Extension<DynCardAggregateService>,
    Path(card_number): Path<String>,
    Json(amount): Json<Decimal>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let new_balance = service
        .topup(&card_number, amount)
        .await
        .map_err(AppErrorHttp)?;
    Ok((StatusCode::CREATED, Json(new_balance)))
}

pub fn aggregate_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/cards-aggregate/balanceOperation", post(balance_operation))
        .route("/cards-aggregate/{id}/spend", post(spend))
        .route("/cards-aggregate/{id}/topup", post(topup))
        .layer(Extension(app_state.aggregate_service.clone()))
}
