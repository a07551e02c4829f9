//! User entity and role enumeration.

pub mod model;
pub mod role;

pub use model::{NewOwner, User};
pub use role::UserRole;
