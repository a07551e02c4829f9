//! Argon2id password hashing with PHC-formatted output.
//!
//! Hashes are stored as `$argon2id$v=19$m=..,t=..,p=..$<salt>$<digest>`
//! with unpadded standard base64 for the salt and digest. Verification
//! recomputes the digest with the parameters embedded in the stored
//! string, so parameter upgrades never invalidate existing hashes.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use subtle::ConstantTimeEq;

use talentgate_core::config::auth::HashConfig;
use talentgate_core::error::AppError;
use talentgate_core::result::AppResult;

/// Argon2id password hasher.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    config: HashConfig,
}

/// Parameters and payloads recovered from a stored PHC string.
struct DecodedHash {
    memory_kib: u32,
    time_cost: u32,
    parallelism: u32,
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl PasswordHasher {
    /// Create a hasher with the given Argon2id parameters.
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// Hash a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let mut salt = vec![0u8; self.config.salt_len];
        OsRng.fill_bytes(&mut salt);

        let digest = self.derive(
            password,
            &salt,
            self.config.memory_kib,
            self.config.time_cost,
            self.config.parallelism,
            self.config.output_len,
        )?;

        Ok(format!(
            "$argon2id$v=19$m={},t={},p={}${}${}",
            self.config.memory_kib,
            self.config.time_cost,
            self.config.parallelism,
            STANDARD_NO_PAD.encode(&salt),
            STANDARD_NO_PAD.encode(&digest),
        ))
    }

    /// Verify a password against a stored PHC string.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for malformed or
    /// unsupported stored hashes.
    pub fn verify(&self, password: &str, encoded: &str) -> AppResult<bool> {
        let decoded = decode_phc(encoded)?;

        let computed = self.derive(
            password,
            &decoded.salt,
            decoded.memory_kib,
            decoded.time_cost,
            decoded.parallelism,
            decoded.digest.len(),
        )?;

        Ok(bool::from(computed.ct_eq(&decoded.digest)))
    }

    fn derive(
        &self,
        password: &str,
        salt: &[u8],
        memory_kib: u32,
        time_cost: u32,
        parallelism: u32,
        output_len: usize,
    ) -> AppResult<Vec<u8>> {
        let params = Params::new(memory_kib, time_cost, parallelism, Some(output_len))
            .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {e}")))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut digest = vec![0u8; output_len];
        argon2
            .hash_password_into(password.as_bytes(), salt, &mut digest)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(digest)
    }
}

fn decode_phc(encoded: &str) -> AppResult<DecodedHash> {
    let malformed = || AppError::internal("Malformed password hash");

    let segments: Vec<&str> = encoded.split('$').collect();
    if segments.len() != 6 || !segments[0].is_empty() {
        return Err(malformed());
    }
    if segments[1] != "argon2id" {
        return Err(AppError::internal("Unsupported password hash algorithm"));
    }

    let version: u32 = segments[2]
        .strip_prefix("v=")
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    if version != Version::V0x13 as u32 {
        return Err(AppError::internal("Unsupported password hash version"));
    }

    let mut memory_kib = None;
    let mut time_cost = None;
    let mut parallelism = None;
    for param in segments[3].split(',') {
        let (name, value) = param.split_once('=').ok_or_else(malformed)?;
        let value: u32 = value.parse().map_err(|_| malformed())?;
        match name {
            "m" => memory_kib = Some(value),
            "t" => time_cost = Some(value),
            "p" => parallelism = Some(value),
            _ => return Err(malformed()),
        }
    }

    Ok(DecodedHash {
        memory_kib: memory_kib.ok_or_else(malformed)?,
        time_cost: time_cost.ok_or_else(malformed)?,
        parallelism: parallelism.ok_or_else(malformed)?,
        salt: STANDARD_NO_PAD
            .decode(segments[4])
            .map_err(|_| malformed())?,
        digest: STANDARD_NO_PAD
            .decode(segments[5])
            .map_err(|_| malformed())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Low-cost parameters so tests stay fast.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(HashConfig {
            memory_kib: 1024,
            time_cost: 1,
            parallelism: 1,
            output_len: 32,
            salt_len: 16,
        })
    }

    #[test]
    fn hash_then_verify_accepts_the_password() {
        let hasher = test_hasher();
        let encoded = hasher.hash("hunter2!").unwrap();

        assert!(encoded.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
        assert!(hasher.verify("hunter2!", &encoded).unwrap());
        assert!(!hasher.verify("hunter3!", &encoded).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let hasher = test_hasher();
        let a = hasher.hash("same-password").unwrap();
        let b = hasher.hash("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_uses_parameters_from_the_stored_hash() {
        // Hash with one parameter set, verify with a hasher configured
        // differently. The stored parameters must win.
        let old = PasswordHasher::new(HashConfig {
            memory_kib: 2048,
            time_cost: 2,
            parallelism: 1,
            output_len: 32,
            salt_len: 16,
        });
        let encoded = old.hash("migrate-me").unwrap();

        let current = test_hasher();
        assert!(current.verify("migrate-me", &encoded).unwrap());
    }

    #[test]
    fn malformed_hashes_are_rejected() {
        let hasher = test_hasher();
        for bad in [
            "",
            "not-a-hash",
            "$argon2i$v=19$m=1024,t=1,p=1$c2FsdA$ZGlnZXN0",
            "$argon2id$v=18$m=1024,t=1,p=1$c2FsdA$ZGlnZXN0",
            "$argon2id$v=19$m=1024,t=1$c2FsdA$ZGlnZXN0",
            "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA",
            "$argon2id$v=19$m=1024,t=1,p=1$!!!$ZGlnZXN0",
        ] {
            assert!(hasher.verify("pw", bad).is_err(), "accepted: {bad}");
        }
    }
}
