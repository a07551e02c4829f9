//! Token claim set.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every access token.
///
/// The subject is a session id, never a user id: the token is a
/// reference into the session store, not a self-contained identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuing service.
    pub iss: String,
    /// Session id.
    pub sub: Uuid,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Session id carried by the token.
    pub fn session_id(&self) -> Uuid {
        self.sub
    }
}
