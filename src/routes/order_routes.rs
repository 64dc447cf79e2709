use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::dto::order_dto::OrderRequest;
use crate::models::Order;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_order_request;

pub fn create_order_router() -> Router<AppState> {
    Router::new().route("/", post(create_order))
}

async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidOrderRequest(rejection.body_text()))?;

    let order = validate_order_request(request)?;
    let saved = state.orders.create_order(order).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}
