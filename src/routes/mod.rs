pub mod jeep_routes;
pub mod order_routes;

use axum::{middleware::from_fn, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::middleware::{error_mapper, panic_response, route_not_found};
use crate::state::AppState;

/// Router completo de la API
///
/// El orden de las capas importa: `error_mapper` envuelve a
/// `CatchPanicLayer` para que un panic también salga con el payload estándar.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/jeeps", jeep_routes::create_jeep_router())
        .nest("/orders", order_routes::create_order_router())
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn(error_mapper))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
