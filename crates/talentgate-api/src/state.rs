//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use talentgate_auth::rate_limit::RateLimiter;
use talentgate_auth::rbac::RbacEnforcer;
use talentgate_auth::session::SessionStore;
use talentgate_auth::token::TokenVerifier;
use talentgate_core::config::AppConfig;
use talentgate_service::auth::AuthService;
use talentgate_service::invite::InviteService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Login, registration, logout.
    pub auth_service: Arc<AuthService>,
    /// Invitation lifecycle.
    pub invite_service: Arc<InviteService>,
    /// Access token verification.
    pub token_verifier: Arc<TokenVerifier>,
    /// Session lookup for the session middleware.
    pub sessions: SessionStore,
    /// Fixed-window request throttling.
    pub rate_limiter: Arc<RateLimiter>,
    /// Policy decision point.
    pub rbac: Arc<RbacEnforcer>,
}
