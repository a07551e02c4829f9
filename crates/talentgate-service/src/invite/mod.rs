//! Team invitations.

pub mod service;

pub use service::InviteService;
