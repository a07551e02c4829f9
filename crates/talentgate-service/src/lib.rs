//! Business logic services for TalentGate.
//!
//! Services compose the repositories, the session store, and the token
//! and password primitives into the login, registration, and invitation
//! workflows the HTTP layer exposes.

pub mod auth;
pub mod invite;

mod session_flow;

pub use auth::{AuthService, IssuedToken, RegisterOwner};
pub use invite::InviteService;
