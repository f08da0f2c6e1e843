//! Salted password digests and opaque tokens.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A salted SHA-256 digest of a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PasswordDigest {
    salt: String,
    hash: String,
}

impl PasswordDigest {
    /// Hashes `password` under a fresh random salt.
    pub(crate) fn new(password: &str) -> Self {
        Self::with_salt(fresh_token(), password)
    }

    fn with_salt(salt: String, password: &str) -> Self {
        let hash = digest(&salt, password);
        Self { salt, hash }
    }

    /// Whether `password` hashes to this digest under the stored salt.
    pub(crate) fn matches(&self, password: &str) -> bool {
        digest(&self.salt, password) == self.hash
    }
}

fn digest(salt: &str, password: &str) -> String {
    let output = Sha256::new()
        .chain_update(salt.as_bytes())
        .chain_update(password.as_bytes())
        .finalize();
    format!("{output:x}")
}

/// 32 lower-case hex characters drawn from a v4 UUID.
pub(crate) fn fresh_token() -> String {
    Uuid::new_v4().simple().to_string()
}
