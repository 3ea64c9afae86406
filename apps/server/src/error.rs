use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use finboard_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Every failure leaves the API as a 500 with a fixed, route-specific
/// message. The underlying cause is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}: {source}")]
    Core {
        message: &'static str,
        #[source]
        source: CoreError,
    },
    #[error("{message}: {source}")]
    Body {
        message: &'static str,
        #[source]
        source: JsonRejection,
    },
}

impl ApiError {
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Core { message, .. } | ApiError::Body { message, .. } => *message,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let body = Json(ErrorBody {
            error: self.message(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Attaches the client-facing message to a failed core call.
pub trait ApiContext<T> {
    fn or_api_error(self, message: &'static str) -> ApiResult<T>;
}

impl<T> ApiContext<T> for finboard_core::Result<T> {
    fn or_api_error(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|source| ApiError::Core { message, source })
    }
}

impl<T> ApiContext<T> for Result<T, JsonRejection> {
    fn or_api_error(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|source| ApiError::Body { message, source })
    }
}
