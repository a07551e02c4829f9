//! Token issuance and password hashing configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// `token_ttl_seconds` is the single source of truth for both the JWT
/// expiry claim and the session store TTL, so neither can outlive the
/// other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Issuer string embedded in and required of every token.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Token (and session) lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Path to the Ed25519 private key (PKCS#8 PEM) used for signing.
    #[serde(default = "default_private_key_path")]
    pub private_key_path: String,
    /// Path to the Ed25519 public key (PEM) used for verification.
    #[serde(default = "default_public_key_path")]
    pub public_key_path: String,
    /// Argon2id parameters.
    #[serde(default)]
    pub hash: HashConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: default_issuer(),
            token_ttl_seconds: default_token_ttl(),
            private_key_path: default_private_key_path(),
            public_key_path: default_public_key_path(),
            hash: HashConfig::default(),
        }
    }
}

/// Argon2id password hashing parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HashConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of iterations.
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    /// Digest length in bytes.
    #[serde(default = "default_output_len")]
    pub output_len: usize,
    /// Salt length in bytes.
    #[serde(default = "default_salt_len")]
    pub salt_len: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            time_cost: default_time_cost(),
            parallelism: default_parallelism(),
            output_len: default_output_len(),
            salt_len: default_salt_len(),
        }
    }
}

fn default_issuer() -> String {
    "talentgate".to_string()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_private_key_path() -> String {
    "config/keys/token_ed25519.pem".to_string()
}

fn default_public_key_path() -> String {
    "config/keys/token_ed25519.pub.pem".to_string()
}

fn default_memory_kib() -> u32 {
    65536
}

fn default_time_cost() -> u32 {
    3
}

fn default_parallelism() -> u32 {
    2
}

fn default_output_len() -> usize {
    32
}

fn default_salt_len() -> usize {
    16
}
