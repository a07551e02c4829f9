//! Extractor exposing the session resolved by the session middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use talentgate_core::error::AppError;

use crate::error::ApiError;
use crate::middleware::session::SessionContext;

/// The caller's session, available in handlers behind the session
/// middleware.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionContext);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| AppError::invalid_token("Missing session").into())
    }
}
