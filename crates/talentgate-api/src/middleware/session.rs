//! Session resolution middleware.
//!
//! Reads the `access_token` cookie, verifies the token, and resolves
//! the session it references. Requests without a live session never
//! reach the handler. The resolved [`SessionContext`] is inserted into
//! the request extensions for downstream middleware and extractors.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use talentgate_core::error::AppError;
use talentgate_entity::SessionSubject;

use crate::cookies::ACCESS_TOKEN;
use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, as resolved from their session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Id of the session the presented token references.
    pub session_id: Uuid,
    /// Who the caller is within their team.
    pub subject: SessionSubject,
}

/// Reject requests without a valid token and live session.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(request.headers());
    let token = jar
        .get(ACCESS_TOKEN)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::invalid_token("Missing access token"))?;

    let claims = state.token_verifier.verify(&token)?;
    let subject = state
        .sessions
        .get(claims.session_id())
        .await?
        .ok_or_else(AppError::session_not_found)?;

    request.extensions_mut().insert(SessionContext {
        session_id: claims.session_id(),
        subject,
    });
    Ok(next.run(request).await)
}
