use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Failed to render {what}: {reason}")]
    Render { what: &'static str, reason: String },
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::UnknownLocale(_) => StatusCode::NOT_FOUND,
            SiteError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SiteError::UnknownLocale(_) => "NOT_FOUND",
            SiteError::Render { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        let body = serde_json::json!({
            "ok": false,
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
