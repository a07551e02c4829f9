//! Session subject model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserRole;

/// The server-held record a bearer token's subject resolves to.
///
/// The token itself carries only an opaque session id; everything a
/// request needs to act on behalf of a user lives here, in the session
/// store. Deleting this record revokes the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSubject {
    /// The authenticated user.
    pub user_id: Uuid,
    /// The user's team.
    pub team_id: Uuid,
    /// The user's role at session creation time.
    pub role: UserRole,
}
