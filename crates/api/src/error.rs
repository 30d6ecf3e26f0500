//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quotes::QuoteError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Quote selection error.
    Quote(QuoteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Quote(err) => quote_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn quote_error_to_response(err: QuoteError) -> (StatusCode, String) {
    tracing::error!(error = %err, "quote selection failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError::Quote(err)
    }
}
