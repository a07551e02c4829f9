//! RBAC enforcement middleware.
//!
//! Runs after session resolution: it reads the [`SessionContext`] from
//! the request extensions and asks the policy engine whether the
//! caller's role may perform this method on this path. Enforcement
//! failures fail closed.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use talentgate_core::error::AppError;

use crate::error::ApiError;
use crate::middleware::session::SessionContext;
use crate::state::AppState;

/// Deny the request unless a policy allows the caller's role to act.
pub async fn enforce_policy(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = request
        .extensions()
        .get::<SessionContext>()
        .cloned()
        .ok_or_else(|| AppError::invalid_token("Missing session"))?;

    let allowed = state
        .rbac
        .enforce(
            context.subject.role.as_str(),
            &context.subject.team_id.to_string(),
            request.uri().path(),
            request.method().as_str(),
        )
        .map_err(|e| {
            AppError::with_source(
                talentgate_core::ErrorKind::ServiceUnavailable,
                "Policy evaluation failed",
                e,
            )
        })?;

    if !allowed {
        return Err(AppError::forbidden("Insufficient role").into());
    }
    Ok(next.run(request).await)
}
