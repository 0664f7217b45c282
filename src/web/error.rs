//! HTML rendering of application errors.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// An [`AppError`] rendered as an HTML error page.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        WebError(err)
    }
}

impl WebError {
    pub fn not_found() -> Self {
        WebError(AppError::not_found("Page not found", serde_json::json!({})))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        // Internal details are already logged where the error was created.
        let message = match &self.0 {
            AppError::Internal { .. } => "Something went wrong. Please try again later.".to_string(),
            other => other.to_string(),
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render error page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> WebError {
    WebError::not_found()
}
