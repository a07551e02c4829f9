//! Auth handlers: login, register, logout.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_service::auth::RegisterOwner;

use crate::cookies::{ACCESS_TOKEN, access_cookie, removal_cookie};
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state.auth_service.login(&req.email, &req.password).await?;

    let jar = jar.add(access_cookie(issued.token.clone(), issued.expires_in));
    Ok((
        jar,
        Json(TokenResponse {
            access_token: issued.token,
            expires_in: issued.expires_in,
        }),
    ))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state
        .auth_service
        .register_owner(RegisterOwner {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
            team_name: req.team_name,
        })
        .await?;

    let jar = jar.add(access_cookie(issued.token.clone(), issued.expires_in));
    Ok((
        jar,
        Json(TokenResponse {
            access_token: issued.token,
            expires_in: issued.expires_in,
        }),
    ))
}

/// POST /logout
///
/// Verifies the presented token and revokes its session. Revoking an
/// already-gone session still succeeds, so repeating a logout is safe.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let token = jar
        .get(ACCESS_TOKEN)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::invalid_token("Missing access token"))?;

    state.auth_service.logout(&token).await?;

    let jar = jar.add(removal_cookie());
    Ok((
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    ))
}
