use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::card::service::{command::DynCardCommandService, query::DynCardQueryService},
    domain::requests::{CoveredCardQuery, CreateCardRequest, UpdateBalanceRequest},
    domain::responses::CardResponse,
    errors::{AppErrorHttp, ServiceError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/cards",
    tag = "Card",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card created"),
        (status = 404, description = "Owner not found"),
        (status = 422, description = "Malformed request")
    )
)]
pub async fn create_card(
    Extension(service): Extension<DynCardCommandService>,
    Json(req): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service.create_card(&req).await.map_err(AppErrorHttp)?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/cards/{id}",
    tag = "Card",
    params(("id" = String, Path, description = "Card number")),
    responses(
        (status = 200, description = "Valid card", body = CardResponse),
        (status = 404, description = "Card missing or blocked")
    )
)]
pub async fn get_card(
    Extension(service): Extension<DynCardQueryService>,
    Path(card_number): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let card = service
        .find_valid_card(&card_number)
        .await
        .map_err(AppErrorHttp)?
        .ok_or_else(|| {
            AppErrorHttp(ServiceError::NotFound(format!(
                "Card number: {card_number} not found"
            )))
        })?;

    Ok(Json(card))
}

#[utoipa::path(
    get,
    path = "/cards/getAllCardsByUser/{username}",
    tag = "Card",
    params(("username" = String, Path, description = "Owning username")),
    responses(
        (status = 200, description = "Cards of the user", body = Vec<CardResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_cards_by_user(
    Extension(service): Extension<DynCardQueryService>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let cards = service
        .find_all_by_username(&username)
        .await
        .map_err(AppErrorHttp)?;

    Ok(Json(cards))
}

#[utoipa::path(
    get,
    path = "/cards/covered/{id}",
    tag = "Card",
    params(
        ("id" = String, Path, description = "Card number"),
        CoveredCardQuery
    ),
    responses(
        (status = 200, description = "Card covering the amount", body = CardResponse),
        (status = 404, description = "Card missing, blocked or insufficient balance")
    )
)]
pub async fn get_covered_card(
    Extension(service): Extension<DynCardQueryService>,
    Path(card_number): Path<String>,
    Query(query): Query<CoveredCardQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let card = service
        .find_valid_covered_card(&card_number, query.amount)
        .await
        .map_err(AppErrorHttp)?
        .ok_or_else(|| {
            AppErrorHttp(ServiceError::NotFound(format!(
                "Card number: {card_number} not found, blocked or insufficient balance"
            )))
        })?;

    Ok(Json(card))
}

#[utoipa::path(
    put,
    path = "/cards/{id}/updateBalance",
    tag = "Card",
    params(("id" = i64, Path, description = "Card id")),
    request_body = UpdateBalanceRequest,
    responses(
        (status = 204, description = "Balance updated"),
        (status = 404, description = "Card not found"),
        (status = 409, description = "Concurrent update detected"),
        (status = 422, description = "Malformed request")
    )
)]
pub async fn update_balance(
    Extension(service): Extension<DynCardCommandService>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBalanceRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service
        .update_balance(id, req.new_balance)
        .await
        .map_err(AppErrorHttp)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn card_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/cards", post(create_card))
        .route("/cards/{id}", get(get_card))
        .route(
            "/cards/getAllCardsByUser/{username}",
            get(get_cards_by_user),
        )
        .route("/cards/covered/{id}", get(get_covered_card))
        .route("/cards/{id}/updateBalance", put(update_balance))
        .layer(Extension(app_state.di_container.card_query.service.clone()))
        .layer(Extension(
            app_state.di_container.card_command.service.clone(),
        ))
}
