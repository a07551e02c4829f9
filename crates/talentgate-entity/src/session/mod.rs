//! Session subject record.

pub mod model;

pub use model::SessionSubject;
