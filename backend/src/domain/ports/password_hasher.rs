//! Port for one-way password hashing.
//!
//! Implementations are CPU-bound and synchronous; callers on the async
//! executor move them onto the blocking pool.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised while producing a digest.
    pub enum PasswordHashError {
        /// The underlying primitive rejected the input or failed.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Salted, adaptive password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `plaintext` against a stored digest.
    ///
    /// A malformed digest verifies as `false`.
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool;
}
