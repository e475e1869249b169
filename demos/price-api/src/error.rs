use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Unified error type that renders as the API's failure envelope
/// `{"status": "fail", "data": null, "error": "..."}` with an appropriate
/// HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "status": "fail",
                "data": null,
                "error": self.message,
            })),
        )
            .into_response()
    }
}

impl From<metaldesk_sdk::MetaldeskError> for AppError {
    fn from(e: metaldesk_sdk::MetaldeskError) -> Self {
        use metaldesk_sdk::MetaldeskError::*;
        match &e {
            NotFound(msg) => AppError::not_found(msg.clone()),
            Unauthorized(msg) => AppError::unauthorized(msg.clone()),
            Validation(errors) => AppError::bad_request(errors.to_string()),
            InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            _ => AppError::internal(e.to_string()),
        }
    }
}
