use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Please log in to view the dashboard")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Dashboard unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
