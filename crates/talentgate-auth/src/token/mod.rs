//! Ed25519-signed bearer tokens.
//!
//! Tokens carry only the issuer, a session id, and the issue/expiry
//! timestamps. Everything else about the caller lives in the session
//! store, so revoking the session invalidates the token immediately.

pub mod claims;
pub mod signer;
pub mod verifier;

pub use claims::Claims;
pub use signer::TokenSigner;
pub use verifier::TokenVerifier;
