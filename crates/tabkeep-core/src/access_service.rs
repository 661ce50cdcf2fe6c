//! Password digest handling for the destructive wipe.

use sha2::{Digest, Sha256};
use tabkeep_config::AccessConfig;

/// Outcome of checking a password against the stored digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Granted,
    /// No digest is stored, so nothing can be authorized.
    NoPassword,
    WrongPassword,
}

impl Authorization {
    pub fn is_granted(self) -> bool {
        matches!(self, Authorization::Granted)
    }
}

/// Stateless helpers for setting and checking the access password.
pub struct AccessService;

impl AccessService {
    /// Hex-encoded SHA-256 of the password bytes.
    pub fn digest(plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Builds the configuration that replaces any previously stored password.
    pub fn set_password(plaintext: &str) -> AccessConfig {
        AccessConfig::with_hash(Self::digest(plaintext))
    }

    /// Compares the digest of `plaintext` with the stored one.
    ///
    /// This is a plain string comparison, not a constant-time one.
    pub fn authorize(config: Option<&AccessConfig>, plaintext: &str) -> Authorization {
        match config.and_then(AccessConfig::password_hash) {
            None => Authorization::NoPassword,
            Some(stored) if stored == Self::digest(plaintext) => Authorization::Granted,
            Some(_) => Authorization::WrongPassword,
        }
    }
}
