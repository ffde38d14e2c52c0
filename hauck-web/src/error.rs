//! Error types for hauck-web.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hauck_core::CalcError;
use serde::Serialize;

/// Web service errors.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Calculation(#[from] CalcError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Render failed: {0}")]
    Render(String),
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Calculation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WebError::Calculation(err) => err.code(),
            WebError::InvalidRequest(_) => "INVALID_REQUEST",
            WebError::Render(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<handlebars::RenderError> for WebError {
    fn from(err: handlebars::RenderError) -> Self {
        WebError::Render(err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "error": ApiError {
                code: self.code().to_string(),
                message: self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
