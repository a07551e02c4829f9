//! Application builder — wires router, middleware, and state into an
//! Axum app and runs the server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use talentgate_auth::password::PasswordHasher;
use talentgate_auth::rate_limit::RateLimiter;
use talentgate_auth::rbac::RbacEnforcer;
use talentgate_auth::session::SessionStore;
use talentgate_auth::token::{TokenSigner, TokenVerifier};
use talentgate_cache::provider::CacheManager;
use talentgate_core::clock::{Clock, SystemClock};
use talentgate_core::config::AppConfig;
use talentgate_core::error::{AppError, ErrorKind};
use talentgate_core::result::AppResult;
use talentgate_core::traits::cache::CacheProvider;
use talentgate_database::repositories::{PgInviteRepository, PgUserRepository};
use talentgate_service::auth::AuthService;
use talentgate_service::invite::InviteService;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the TalentGate server with the given configuration and pool.
pub async fn run_server(config: AppConfig, pool: PgPool) -> AppResult<()> {
    info!(provider = %config.cache.provider, "Initializing cache");
    let cache = CacheManager::new(&config.cache).await?;
    let cache: Arc<dyn CacheProvider> = Arc::new(cache);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let invites = Arc::new(PgInviteRepository::new(pool));

    let hasher = PasswordHasher::new(config.auth.hash);
    let signer = TokenSigner::from_config(&config.auth)?;
    let verifier = TokenVerifier::from_config(&config.auth)?;
    let sessions = SessionStore::new(Arc::clone(&cache));

    let auth_service = AuthService::new(
        users,
        hasher,
        signer.clone(),
        verifier.clone(),
        sessions.clone(),
    );
    let invite_service = InviteService::new(
        invites,
        hasher,
        signer,
        sessions.clone(),
        Arc::clone(&clock),
        &config.invite,
    );
    let rate_limiter = RateLimiter::new(Arc::clone(&cache), clock, &config.rate_limit);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        auth_service: Arc::new(auth_service),
        invite_service: Arc::new(invite_service),
        token_verifier: Arc::new(verifier),
        sessions,
        rate_limiter: Arc::new(rate_limiter),
        rbac: Arc::new(RbacEnforcer::new()),
    };

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
        })?;

    info!(%addr, "TalentGate listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
