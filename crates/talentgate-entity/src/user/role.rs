//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use talentgate_core::AppError;

/// Roles a user can hold within a team.
///
/// `Owner` is granted exactly once, to the user who registered the team.
/// All other roles arrive through the invitation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// The team's founding user. Full control, including invitations.
    Owner,
    /// Administrator invited by the owner. May also invite.
    Admin,
    /// Runs hiring pipelines; cannot manage team membership.
    Recruiter,
    /// Read-mostly collaborator.
    Member,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Recruiter => "recruiter",
            Self::Member => "member",
        }
    }

    /// Whether this role may manage team membership.
    pub fn can_invite(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "recruiter" => Ok(Self::Recruiter),
            "member" => Ok(Self::Member),
            other => Err(AppError::validation(format!("Unknown role: '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("owner".parse::<UserRole>().unwrap(), UserRole::Owner);
        assert_eq!("member".parse::<UserRole>().unwrap(), UserRole::Member);
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn invite_capability_follows_role() {
        assert!(UserRole::Owner.can_invite());
        assert!(UserRole::Admin.can_invite());
        assert!(!UserRole::Recruiter.can_invite());
        assert!(!UserRole::Member.can_invite());
    }
}
