//! # talentgate-entity
//!
//! Domain entity models for TalentGate: users, teams, invitations, and
//! session subjects. Pure data — no behavior beyond small accessors.

pub mod invite;
pub mod session;
pub mod team;
pub mod user;

pub use invite::{AcceptInvite, CreateInvite, Invite, InvitePreview, NewInvite, NewInvitedUser};
pub use session::SessionSubject;
pub use team::Team;
pub use user::{NewOwner, User, UserRole};
