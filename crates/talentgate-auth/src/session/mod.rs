//! Cache-backed session storage.

pub mod store;

pub use store::SessionStore;
