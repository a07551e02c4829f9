//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use talentgate_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying an `AppError` across the Axum boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidCredentials
            | ErrorKind::InvalidToken
            | ErrorKind::SessionNotFound => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::InviteNotFound | ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UserAlreadyExists | ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InviteExpired => StatusCode::GONE,
            ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Database
            | ErrorKind::Cache
            | ErrorKind::Configuration
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Server-side failures are logged in full but returned opaque.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "Internal server error");
            "Internal server error".to_string()
        } else {
            err.message.clone()
        };

        let body = ApiErrorResponse {
            error: err.kind().to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn kinds_map_to_expected_statuses() {
        assert_eq!(
            status_of(AppError::invalid_credentials()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::user_already_exists()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::invite_not_found()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AppError::invite_expired()), StatusCode::GONE);
        assert_eq!(
            status_of(AppError::rate_limited("slow down")),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_of(AppError::database("connection lost")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
