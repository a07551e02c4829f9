//! Policy evaluation for protected routes.
//!
//! Policies are (subject, object, action) triples where the subject is
//! a role name and the object is a route path. Evaluation is scoped to
//! the caller's team: the enforcer answers "may this role do this
//! action on this object", and the team id delimits the domain the
//! answer applies to.

use talentgate_core::result::AppResult;
use talentgate_entity::UserRole;
use tracing::debug;

/// A single allow rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Role name, e.g. `"admin"`.
    pub subject: String,
    /// Route path, e.g. `"/invite"`.
    pub object: String,
    /// HTTP method, e.g. `"POST"`.
    pub action: String,
}

impl Policy {
    pub fn new(
        subject: impl Into<String>,
        object: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
            action: action.into(),
        }
    }
}

/// In-process policy store and decision point.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    policies: Vec<Policy>,
}

impl RbacEnforcer {
    /// Enforcer with the built-in policy set: owners and admins may
    /// send invitations.
    pub fn new() -> Self {
        Self::with_policies(vec![
            Policy::new(UserRole::Owner.as_str(), "/invite", "POST"),
            Policy::new(UserRole::Admin.as_str(), "/invite", "POST"),
        ])
    }

    /// Enforcer with an explicit policy set.
    pub fn with_policies(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    /// Decide whether `subject` may perform `action` on `object` within
    /// `domain`. Unknown subjects and objects deny; nothing here errors
    /// today, but callers must treat `Err` as "fail closed".
    pub fn enforce(
        &self,
        subject: &str,
        domain: &str,
        object: &str,
        action: &str,
    ) -> AppResult<bool> {
        let allowed = self
            .policies
            .iter()
            .any(|p| p.subject == subject && p.object == object && p.action == action);

        if !allowed {
            debug!(subject, domain, object, action, "Access denied by policy");
        }
        Ok(allowed)
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owners_and_admins_may_invite() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer.enforce("owner", "t1", "/invite", "POST").unwrap());
        assert!(enforcer.enforce("admin", "t1", "/invite", "POST").unwrap());
    }

    #[test]
    fn other_roles_are_denied() {
        let enforcer = RbacEnforcer::new();
        assert!(!enforcer.enforce("recruiter", "t1", "/invite", "POST").unwrap());
        assert!(!enforcer.enforce("member", "t1", "/invite", "POST").unwrap());
        assert!(!enforcer.enforce("", "t1", "/invite", "POST").unwrap());
    }

    #[test]
    fn unknown_objects_and_actions_are_denied() {
        let enforcer = RbacEnforcer::new();
        assert!(!enforcer.enforce("owner", "t1", "/teams", "POST").unwrap());
        assert!(!enforcer.enforce("owner", "t1", "/invite", "DELETE").unwrap());
    }
}
