//! Invitation handlers: create, validate, accept.

use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use talentgate_core::error::AppError;
use talentgate_entity::{AcceptInvite, CreateInvite};

use crate::cookies::access_cookie;
use crate::dto::request::{AcceptInviteRequest, InviteRequest, ValidateQuery};
use crate::dto::response::{InviteCreatedResponse, InvitePreviewResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// POST /invite
///
/// Session and RBAC middleware run before this handler; only owners
/// and admins reach it.
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(context): CurrentSession,
    Json(req): Json<InviteRequest>,
) -> Result<Json<InviteCreatedResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let invite = state
        .invite_service
        .create_invite(
            &context.subject,
            CreateInvite {
                email: req.email,
                role: req.role,
                job_ids: req.job_ids,
            },
        )
        .await?;

    Ok(Json(InviteCreatedResponse {
        id: invite.id,
        email: invite.email,
        role: invite.role,
        token: invite.token,
        expires_at: invite.expires_at,
    }))
}

/// GET /validate?token=...
pub async fn validate(
    State(state): State<AppState>,
    Query(query): Query<ValidateQuery>,
) -> Result<Json<InvitePreviewResponse>, ApiError> {
    preview_invite(&state, &query.token).await
}

/// POST /validate with a JSON body, for clients that keep the token out
/// of the URL.
pub async fn validate_post(
    State(state): State<AppState>,
    Json(body): Json<ValidateQuery>,
) -> Result<Json<InvitePreviewResponse>, ApiError> {
    preview_invite(&state, &body.token).await
}

async fn preview_invite(
    state: &AppState,
    token: &str,
) -> Result<Json<InvitePreviewResponse>, ApiError> {
    let preview = state.invite_service.validate_invite(token).await?;
    Ok(Json(InvitePreviewResponse {
        email: preview.email,
    }))
}

/// POST /create-user
///
/// Accepts an invitation: creates the user and logs them straight in.
pub async fn accept(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AcceptInviteRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state
        .invite_service
        .accept_invite(AcceptInvite {
            token: req.token,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
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
