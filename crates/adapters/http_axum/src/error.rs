//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fastnomads_domain::error::FastNomadsError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure a handler can produce, rendered as `{"error": "..."}`.
pub enum ApiError {
    /// Error raised by the application layer.
    Domain(FastNomadsError),
    /// The request body could not be decoded into the expected payload.
    Payload(JsonRejection),
    /// A path parameter could not be decoded.
    Path(PathRejection),
}

impl From<FastNomadsError> for ApiError {
    fn from(err: FastNomadsError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Payload(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Path(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(FastNomadsError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(FastNomadsError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Payload(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (rejection.status(), rejection.body_text())
            }
            Self::Path(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
