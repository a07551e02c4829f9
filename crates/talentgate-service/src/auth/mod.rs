//! Login, registration, and logout.

pub mod service;

pub use service::{AuthService, IssuedToken, RegisterOwner};
