//! Mapping of [`ProviderError`] onto HTTP responses.
//!
//! Client errors are answered in plain text, which is what the deploying platform
//! expects from `/deploy` and `/analytics`.

use crate::error::ProviderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Plain-text message for the error as seen by the platform.
fn message(error: &ProviderError, context: &str) -> String {
    match error {
        ProviderError::MissingActivityId => format!("Missing activityID {context}."),
        other => other.to_string(),
    }
}

/// A [`ProviderError`] with the place the identifier was expected.
pub struct ApiError {
    error: ProviderError,
    context: &'static str,
}

impl ApiError {
    pub fn in_query(error: ProviderError) -> Self {
        Self {
            error,
            context: "in the query string",
        }
    }

    pub fn in_body(error: ProviderError) -> Self {
        Self {
            error,
            context: "in the request body",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.error, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, message(&self.error, self.context)).into_response()
    }
}
