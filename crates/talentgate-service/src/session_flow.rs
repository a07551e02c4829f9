//! Shared "start a session, then sign a token for it" step.

use uuid::Uuid;

use talentgate_auth::session::SessionStore;
use talentgate_auth::token::TokenSigner;
use talentgate_core::error::AppError;
use talentgate_core::result::AppResult;
use talentgate_entity::{SessionSubject, User};

use crate::auth::IssuedToken;

/// Create a session for the user and issue a token referencing it.
///
/// The session is written before the token is signed, so a token can
/// never circulate without a session behind it.
pub(crate) async fn issue_session(
    signer: &TokenSigner,
    sessions: &SessionStore,
    user: &User,
) -> AppResult<IssuedToken> {
    let ttl = signer
        .ttl()
        .to_std()
        .map_err(|_| AppError::internal("Non-positive token TTL"))?;

    let session_id = Uuid::new_v4();
    let subject = SessionSubject {
        user_id: user.id,
        team_id: user.team_id,
        role: user.role,
    };

    sessions.create(session_id, &subject, ttl).await?;
    let token = signer.issue(session_id)?;

    Ok(IssuedToken {
        token,
        expires_in: ttl.as_secs(),
    })
}
