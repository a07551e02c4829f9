//! PostgreSQL access layer for TalentGate.
//!
//! Repositories are exposed as traits so services and tests can swap
//! the Postgres implementations for the in-memory doubles in
//! [`memory`].

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{InviteRepository, UserRepository};
