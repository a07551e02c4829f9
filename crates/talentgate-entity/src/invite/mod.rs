//! Invitation entity and DTOs.

pub mod model;

pub use model::{AcceptInvite, CreateInvite, Invite, InvitePreview, NewInvite, NewInvitedUser};
