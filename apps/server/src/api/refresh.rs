use std::sync::Arc;

use crate::{
    error::{ApiContext, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use finboard_core::refresh::RefreshSummary;

/// Pulls live balances for every linked item and records material changes.
async fn refresh_balances(State(state): State<Arc<AppState>>) -> ApiResult<Json<RefreshSummary>> {
    let summary = state
        .refresh_service
        .refresh_balances()
        .await
        .or_api_error("Failed to refresh balances")?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/refresh-balances", post(refresh_balances))
}
