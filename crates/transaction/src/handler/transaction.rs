use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::transaction::service::{
        command::DynTransactionCommandService, query::DynTransactionQueryService,
    },
    domain::requests::{CreateTransactionRequest, FindTransactionsQuery},
    domain::responses::{PagedTransactionResponse, TransactionResponse},
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/transactions",
    tag = "Transaction",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Ledger entry created", body = TransactionResponse),
        (status = 422, description = "Malformed request")
    )
)]
pub async fn create_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let record = service.create(&req).await.map_err(AppErrorHttp)?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "Transaction",
    params(
        ("id" = i64, Path, description = "Card id"),
        FindTransactionsQuery
    ),
    responses(
        (status = 200, description = "Page of ledger entries", body = PagedTransactionResponse),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn get_transactions_by_card(
    Extension(service): Extension<DynTransactionQueryService>,
    Path(card_id): Path<i64>,
    Query(query): Query<FindTransactionsQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let page = service
        .find_by_card(card_id, &query)
        .await
        .map_err(AppErrorHttp)?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/transactions/currentMonth/{id}",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Card id")),
    responses(
        (status = 200, description = "Ledger entries of the current month", body = Vec<TransactionResponse>)
    )
)]
pub async fn get_current_month_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
    Path(card_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let rows = service
        .find_current_month(card_id)
        .await
        .map_err(AppErrorHttp)?;
    Ok(Json(rows))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/transactions", post(create_transaction))
        .route("/transactions/{id}", get(get_transactions_by_card))
        .route(
            "/transactions/currentMonth/{id}",
            get(get_current_month_transactions),
        )
        .layer(Extension(
            app_state.di_container.transaction_query.service.clone(),
        ))
        .layer(Extension(
            app_state.di_container.transaction_command.service.clone(),
        ))
}
