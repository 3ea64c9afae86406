use std::sync::Arc;

use crate::{
    error::{ApiContext, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use finboard_core::accounts::AccountOverview;

/// Every account with its institution and most recent snapshot.
async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AccountOverview>>> {
    let overviews = state
        .account_service
        .list_account_overviews()
        .or_api_error("Failed to fetch accounts")?;
    Ok(Json(overviews))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/accounts", get(list_accounts))
}
