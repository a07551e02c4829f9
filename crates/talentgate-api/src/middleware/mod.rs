//! Tower middleware for the HTTP layer.

pub mod cors;
pub mod rate_limit;
pub mod rbac;
pub mod session;
