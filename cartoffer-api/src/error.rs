use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cartoffer_offer::OfferError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    UpstreamError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UpstreamError(msg) => {
                tracing::warn!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<OfferError> for AppError {
    fn from(err: OfferError) -> Self {
        match err {
            OfferError::Resolution(e) => AppError::UpstreamError(e.to_string()),
            OfferError::Storage(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}
