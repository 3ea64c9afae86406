use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use finboard_core::{constants::EMAIL_CONNECTION_FAILED_MESSAGE, errors::Error as CoreError};
use serde::Serialize;

#[derive(Serialize)]
struct TestEmailResponse {
    success: bool,
    message: &'static str,
}

async fn send_test_email(State(state): State<Arc<AppState>>) -> ApiResult<Json<TestEmailResponse>> {
    match state.notification_service.send_test_notification().await {
        Ok(_) => Ok(Json(TestEmailResponse {
            success: true,
            message: "Test email sent successfully!",
        })),
        Err(source) => {
            let message = match &source {
                CoreError::Notification(reason) if reason == EMAIL_CONNECTION_FAILED_MESSAGE => {
                    EMAIL_CONNECTION_FAILED_MESSAGE
                }
                _ => "Failed to send test email",
            };
            Err(ApiError::Core { message, source })
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/test-email", post(send_test_email))
}
