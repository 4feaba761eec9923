//! Errors that stop a request from rendering the summarizer page.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};

use crate::errors::ConfigError;
use crate::views::render_error_page;

#[derive(Debug)]
pub enum ApiError {
    /// Service credentials or client settings are unusable.
    Configuration(ConfigError),
    /// The request body was not a form post the page can read.
    InvalidForm(FormRejection),
}

impl From<ConfigError> for ApiError {
    fn from(error: ConfigError) -> Self {
        ApiError::Configuration(error)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::InvalidForm(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidForm(rejection) => {
                warn!("Rejected form submission: {}", rejection.body_text());
                (
                    rejection.status(),
                    "The form could not be read. Please submit the text from the summarizer page.",
                )
            }
            ApiError::Configuration(e) => {
                error!("Config error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The summarization service is not configured. Please contact the administrator.",
                )
            }
        };
        (status, Html(render_error_page(message))).into_response()
    }
}
