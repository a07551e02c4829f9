//! # talentgate-core
//!
//! Core crate for TalentGate. Contains the unified error system,
//! configuration schemas, the clock abstraction, and the cache provider
//! trait.
//!
//! This crate has **no** internal dependencies on other TalentGate crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
