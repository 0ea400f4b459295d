//! `PasswordHasher` adapter over the `bcrypt` crate.

use tracing::warn;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Bcrypt hasher with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Work factor used in production.
    pub const COST: u32 = 10;

    /// Hasher at [`Self::COST`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_cost(Self::COST)
    }

    /// Hasher at an explicit cost; tests use the bcrypt minimum of 4.
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured work factor.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError> {
        bcrypt::hash(plaintext, self.cost)
            .map(PasswordHash::from_encoded)
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool {
        bcrypt::verify(plaintext, hash.as_encoded()).unwrap_or_else(|err| {
            warn!(error = %err, "stored password digest is malformed");
            false
        })
    }
}
