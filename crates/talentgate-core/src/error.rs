//! Unified application error types for TalentGate.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Error kinds are a closed set and
//! are compared structurally at every boundary — never by matching on
//! message strings.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// Domain conditions (invalid credentials, expired invite, ...) and
/// infrastructure faults (database, cache) share one enum so that the HTTP
/// boundary can map every failure to a status code in a single place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Login failed. Deliberately covers both "no such user" and "wrong
    /// password" so callers cannot enumerate accounts.
    InvalidCredentials,
    /// An account with this email already exists.
    UserAlreadyExists,
    /// No invite matched the supplied token.
    InviteNotFound,
    /// The invite exists but its expiry has passed.
    InviteExpired,
    /// Bearer token failed verification (signature, issuer, or expiry).
    InvalidToken,
    /// The token verified but its session is gone — treated as
    /// unauthenticated, not as a server fault.
    SessionNotFound,
    /// A request budget was exhausted for the current window.
    RateLimited,
    /// The session is valid but RBAC denied the action.
    Forbidden,
    /// Input validation failed.
    Validation,
    /// A conflicting concurrent modification occurred.
    Conflict,
    /// The requested resource was not found.
    NotFound,
    /// A database error occurred.
    Database,
    /// A cache error occurred.
    Cache,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
    /// A required backing service is temporarily unavailable.
    ServiceUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::UserAlreadyExists => write!(f, "USER_ALREADY_EXISTS"),
            Self::InviteNotFound => write!(f, "INVITE_NOT_FOUND"),
            Self::InviteExpired => write!(f, "INVITE_EXPIRED"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::SessionNotFound => write!(f, "SESSION_NOT_FOUND"),
            Self::RateLimited => write!(f, "RATE_LIMITED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Database => write!(f, "DATABASE"),
            Self::Cache => write!(f, "CACHE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

/// The unified application error used throughout TalentGate.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Return the error kind for structural comparison.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "invalid credentials")
    }

    /// Create a user-already-exists error.
    pub fn user_already_exists() -> Self {
        Self::new(ErrorKind::UserAlreadyExists, "user already exists")
    }

    /// Create an invite-not-found error.
    pub fn invite_not_found() -> Self {
        Self::new(ErrorKind::InviteNotFound, "invite not found")
    }

    /// Create an invite-expired error.
    pub fn invite_expired() -> Self {
        Self::new(ErrorKind::InviteExpired, "invite expired")
    }

    /// Create an invalid-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Create a session-not-found error.
    pub fn session_not_found() -> Self {
        Self::new(ErrorKind::SessionNotFound, "session not found")
    }

    /// Create a rate-limited error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimited, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a cache error.
    pub fn cache(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cache, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a service-unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::with_source(ErrorKind::Internal, "JSON (de)serialization failed", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_compare_structurally() {
        let a = AppError::invalid_credentials();
        let b = AppError::new(ErrorKind::InvalidCredentials, "different message");
        assert_eq!(a.kind(), b.kind());
        assert_ne!(a.kind(), AppError::user_already_exists().kind());
    }

    #[test]
    fn display_includes_kind_and_message() {
        let e = AppError::invite_expired();
        assert_eq!(e.to_string(), "INVITE_EXPIRED: invite expired");
    }
}
