//! Error responses for the gateway's HTML surface.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::BillingError;

use super::views;

/// An error rendered as an HTML page with an appropriate status code.
#[derive(Debug)]
pub struct ErrorPage {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The page title.
    pub title: String,
    /// The user-visible message.
    pub message: String,
}

impl ErrorPage {
    /// Creates an error page.
    pub fn new(status: StatusCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            message: message.into(),
        }
    }

    /// A 400 page for a malformed charge submission.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request", message)
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (
            self.status,
            Html(views::error_page(&self.title, &self.message)),
        )
            .into_response()
    }
}

impl From<BillingError> for ErrorPage {
    fn from(error: BillingError) -> Self {
        match &error {
            BillingError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "Invoice not found", error.to_string())
            }
            BillingError::InvalidAmount { .. } => Self::bad_request(error.to_string()),
            BillingError::Transport { .. } | BillingError::Parse { .. } => Self::new(
                StatusCode::BAD_GATEWAY,
                "Service unavailable",
                error.to_string(),
            ),
            BillingError::PlatformWrite { status, body } => Self::new(
                StatusCode::BAD_GATEWAY,
                "Issue with payment",
                format!("The accounting platform returned status {}: {}", status, body),
            ),
            BillingError::ConfigNotFound { .. }
            | BillingError::ConfigParse { .. }
            | BillingError::MissingCredential { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error",
                error.to_string(),
            ),
        }
    }
}
