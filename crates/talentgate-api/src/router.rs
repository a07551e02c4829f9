//! Route definitions for the TalentGate HTTP API.
//!
//! Three groups of routes with different middleware stacks:
//!   - public, throttled: login, register, invite validation, accept
//!   - protected, throttled: invite creation (session, then RBAC)
//!   - unthrottled: logout and the health probe

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::{get, post};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/register", post(handlers::auth::register))
        .route(
            "/validate",
            get(handlers::invite::validate).post(handlers::invite::validate_post),
        )
        .route("/create-user", post(handlers::invite::accept));

    // Layers run outside-in: the session middleware resolves the caller
    // before the RBAC middleware consults the policy engine.
    let protected = Router::new()
        .route("/invite", post(handlers::invite::create))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rbac::enforce_policy,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::require_session,
        ));

    let throttled = public.merge(protected).layer(
        axum_middleware::from_fn_with_state(state.clone(), middleware::rate_limit::throttle),
    );

    Router::new()
        .merge(throttled)
        .route("/logout", post(handlers::auth::logout))
        .route("/health", get(handlers::health::health))
        .with_state(state)
}
