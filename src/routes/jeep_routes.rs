use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::jeep_dto::FetchJeepsQuery;
use crate::models::Jeep;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_model, validate_trim};

pub fn create_jeep_router() -> Router<AppState> {
    Router::new().route("/", get(fetch_jeeps))
}

async fn fetch_jeeps(
    State(state): State<AppState>,
    Query(params): Query<FetchJeepsQuery>,
) -> Result<Json<Vec<Jeep>>, AppError> {
    // Validar antes de tocar la base de datos
    let model = validate_model(params.model.as_deref())?;
    let trim = validate_trim(params.trim.as_deref())?;

    let jeeps = state.jeep_sales.fetch_jeeps(model, &trim).await?;
    Ok(Json(jeeps))
}
