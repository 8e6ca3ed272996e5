use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Rejections produced by `POST /api/contact`.
///
/// Every variant renders as `{ "error": "<message>" }`. Forwarding failures
/// are not errors here: the handler acknowledges those with a 200.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    /// Unreadable request body. The detail is logged, never returned.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = match &self {
            ContactError::MissingFields | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::Internal(detail) => {
                tracing::error!(error = %detail, "Contact form error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}
