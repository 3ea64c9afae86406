use std::sync::Arc;

use crate::{
    error::{ApiContext, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use finboard_core::provider::LinkToken;
use serde::{Deserialize, Serialize};

/// The dashboard has a single user, so every link token is issued for the same id.
const CLIENT_USER_ID: &str = "finboard-user";

async fn create_link_token(State(state): State<Arc<AppState>>) -> ApiResult<Json<LinkToken>> {
    let token = state
        .link_service
        .create_link_token(CLIENT_USER_ID)
        .await
        .or_api_error("Failed to create link token")?;
    Ok(Json(token))
}

#[derive(Deserialize)]
struct ExchangeTokenRequest {
    #[serde(rename = "publicToken", alias = "public_token")]
    public_token: String,
}

#[derive(Serialize)]
struct ExchangeTokenResponse {
    success: bool,
}

async fn exchange_token(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExchangeTokenRequest>, JsonRejection>,
) -> ApiResult<Json<ExchangeTokenResponse>> {
    const FAILED: &str = "Failed to exchange token";

    let Json(request) = payload.or_api_error(FAILED)?;
    let linked = state
        .link_service
        .link_item(&request.public_token)
        .await
        .or_api_error(FAILED)?;
    tracing::info!(
        "Linked item {} with {} accounts",
        linked.item.id,
        linked.accounts.len()
    );
    Ok(Json(ExchangeTokenResponse { success: true }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plaid/create-link-token", post(create_link_token))
        .route("/plaid/exchange-token", post(exchange_token))
}
