//! Port for issuing and verifying signed session tokens.

use crate::domain::{SessionToken, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by session token adapters.
    pub enum SessionTokenError {
        /// The token could not be signed.
        Signing { message: String } => "session token signing failed: {message}",
        /// Signature, structure, subject, or expiry check failed.
        Invalid => "session token is invalid",
    }
}

/// Stateless bearer-token issuer.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokens: Send + Sync {
    /// Sign a token identifying `subject`.
    fn issue(&self, subject: &UserId) -> Result<SessionToken, SessionTokenError>;

    /// Verify `token` and return the subject it identifies.
    ///
    /// Every verification failure collapses into
    /// [`SessionTokenError::Invalid`].
    fn verify(&self, token: &str) -> Result<UserId, SessionTokenError>;
}
