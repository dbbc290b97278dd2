//! Error responses for the HTTP API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// An error ready to be rendered as an HTTP response.
///
/// Every variant maps to a status code and a `{"error": message}` JSON
/// body. Core errors convert via `From`, so handlers can use `?` on engine
/// calls directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed (400).
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The server failed to produce a response (500).
    #[error("{0}")]
    Internal(String),
}

impl From<lattice::Error> for ApiError {
    fn from(err: lattice::Error) -> Self {
        match err {
            lattice::Error::InvalidFilename(_) => Self::BadRequest(err.to_string()),
            lattice::Error::PlanNotFound(_) => Self::NotFound(err.to_string()),
            lattice::Error::Io(_) | lattice::Error::Config(_) | lattice::Error::Snapshot(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_the_right_status() {
        let bad = ApiError::from(lattice::Error::InvalidFilename("../x".to_string()));
        assert!(matches!(bad, ApiError::BadRequest(_)));

        let missing = ApiError::from(lattice::Error::PlanNotFound("a.md".to_string()));
        assert!(matches!(missing, ApiError::NotFound(_)));

        let io = ApiError::from(lattice::Error::Config("broken".to_string()));
        assert!(matches!(io, ApiError::Internal(_)));
    }
}
