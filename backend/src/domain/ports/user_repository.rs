//! Port abstraction for credential store adapters and their errors.
use async_trait::async_trait;

use crate::domain::{EmailAddress, User, UserAccount, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email is already held by another account.
        DuplicateEmail => "user repository already holds an account for this email",
    }
}

/// Credential store.
///
/// `insert` must be atomic with respect to email uniqueness: when two inserts
/// race on one email, exactly one succeeds and the other reports
/// [`UserPersistenceError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account.
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError>;

    /// Fetch an account, digest included, by its exact email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;

    /// Fetch the sanitised profile for an identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}
