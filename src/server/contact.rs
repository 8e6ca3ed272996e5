use crate::domain::model::ContactSubmission;
use crate::server::error::ContactError;
use crate::server::state::AppState;
use crate::utils::validation::is_valid_email;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// Acknowledgment returned when the downstream API could not take the
/// submission.
pub const FORWARD_FALLBACK_MESSAGE: &str =
    "Thank you for your message. We'll get back to you soon!";

/// `POST /api/contact`
///
/// The body is read raw so that an unparseable payload becomes a 500 rather
/// than axum's own JSON rejection.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ContactError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| ContactError::Internal(e.to_string()))?;
    if payload.is_null() {
        return Err(ContactError::Internal("request body is null".to_string()));
    }

    let submission = required_fields(&payload).ok_or(ContactError::MissingFields)?;
    if !is_valid_email(&submission.email) {
        return Err(ContactError::InvalidEmail);
    }

    let forwarded = match state.forwarder.send(&submission).await {
        Ok(raw) => serde_json::from_slice::<Value>(&raw).map_err(Into::into),
        Err(e) => Err(e),
    };

    match forwarded {
        Ok(data) => {
            tracing::info!("📨 Contact submission forwarded for {}", submission.email);
            Ok(Json(json!({ "success": true, "data": data })))
        }
        Err(e) => {
            tracing::warn!("⚠️ Contact forward failed, keeping submission in the log: {}", e);
            tracing::info!(
                name = %submission.name,
                email = %submission.email,
                message = %submission.message,
                timestamp = %chrono::Utc::now().to_rfc3339(),
                "Contact form submission"
            );
            Ok(Json(json!({
                "success": true,
                "message": FORWARD_FALLBACK_MESSAGE,
            })))
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 三個欄位都必須是非空字串
fn required_fields(payload: &Value) -> Option<ContactSubmission> {
    let field = |name: &str| {
        payload
            .get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    Some(ContactSubmission {
        name: field("name")?,
        email: field("email")?,
        message: field("message")?,
    })
}
