use std::sync::Arc;

use crate::{
    error::{ApiContext, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use finboard_core::rollup::{DashboardSummary, RollupHistoryPoint};

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardSummary>> {
    let summary = state
        .rollup_service
        .get_summary()
        .or_api_error("Failed to fetch summary")?;
    Ok(Json(summary))
}

/// Daily totals, oldest day first.
async fn get_balance_history(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RollupHistoryPoint>>> {
    let history = state
        .rollup_service
        .get_balance_history()
        .or_api_error("Failed to fetch balance history")?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/balance-history", get(get_balance_history))
}
