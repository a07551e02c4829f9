//! Request DTOs with validation rules.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use talentgate_entity::UserRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub last_name: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub team_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InviteRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub role: UserRole,
    /// Job postings the invitee should gain access to.
    pub job_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AcceptInviteRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub token: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub last_name: String,
}

/// Query string for `GET /validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateQuery {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_requires_a_real_email() {
        let bad = LoginRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(bad.validate().is_err());

        let ok = LoginRequest {
            email: "user@acme.test".to_string(),
            password: "pw".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn register_request_enforces_password_length() {
        let req = RegisterRequest {
            email: "user@acme.test".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "short".to_string(),
            team_name: "Acme".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
