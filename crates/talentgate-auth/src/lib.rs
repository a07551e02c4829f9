//! Authentication primitives for TalentGate.
//!
//! This crate owns the credential and authorization building blocks:
//! Argon2id password hashing, Ed25519 bearer tokens, the cache-backed
//! session store, the fixed-window rate limiter, and the RBAC
//! enforcement point. Business workflows that compose these live in
//! `talentgate-service`.

pub mod password;
pub mod rate_limit;
pub mod rbac;
pub mod session;
pub mod token;

pub use password::PasswordHasher;
pub use rate_limit::{RateLimitDecision, RateLimiter};
pub use rbac::RbacEnforcer;
pub use session::SessionStore;
pub use token::{Claims, TokenSigner, TokenVerifier};
