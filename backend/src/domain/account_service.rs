//! Account domain service.
//!
//! Implements the [`AccountService`] driving port over the credential store,
//! the password hasher, and the session token issuer. Hashing and
//! verification run on the blocking pool so the executor never stalls on
//! adaptive-cost work.
//!
//! Login for an unknown email still verifies the password, against a decoy
//! digest produced once by the configured hasher, so both failure paths pay
//! the same hashing cost.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AccountService, PasswordHasher, SessionTokens, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Error, LoginCredentials, PasswordHash, Rejection, SessionToken, SignupDetails, User,
    UserAccount, UserId,
};

/// Signup and login over injected adapters.
#[derive(Clone)]
pub struct AccountServiceImpl<R, H, T> {
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
    decoy: Arc<OnceCell<PasswordHash>>,
}

/// Plaintext hashed once to give unknown-email logins a digest to verify.
const DECOY_PASSWORD: &str = "vitmas-decoy-password";

impl<R, H, T> AccountServiceImpl<R, H, T> {
    /// Create a new service with the given adapters.
    #[must_use]
    pub fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
            decoy: Arc::new(OnceCell::new()),
        }
    }
}

/// Map credential store failures onto the domain error.
///
/// Connection and query failures both become internal errors; the HTTP
/// adapter logs their detail and answers with a generic 500.
pub(crate) fn map_user_error(failure: UserPersistenceError) -> Error {
    match failure {
        UserPersistenceError::Connection { message } => {
            error!(%message, "user repository unavailable");
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail => Rejection::DuplicateEmail.into(),
    }
}

impl<R, H, T> AccountServiceImpl<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    T: SessionTokens,
{
    async fn hash_password(&self, plaintext: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let owned = Zeroizing::new(plaintext.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(&owned))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))
    }

    async fn verify_password(&self, plaintext: &str, digest: PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let owned = Zeroizing::new(plaintext.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(&owned, &digest))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
    }

    async fn decoy_digest(&self) -> Result<PasswordHash, Error> {
        self.decoy
            .get_or_try_init(|| self.hash_password(DECOY_PASSWORD))
            .await
            .cloned()
    }
}

#[async_trait]
impl<R, H, T> AccountService for AccountServiceImpl<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    T: SessionTokens,
{
    async fn signup(&self, details: SignupDetails) -> Result<UserId, Error> {
        let existing = self
            .users
            .find_by_email(details.email())
            .await
            .map_err(map_user_error)?;
        if existing.is_some() {
            debug!("signup rejected: email already registered");
            return Err(Rejection::DuplicateEmail.into());
        }

        let password_hash = self.hash_password(details.password()).await?;
        let user = User::new(
            UserId::random(),
            details.full_name(),
            details.registration_number(),
            details.email().clone(),
            details.branch(),
        );
        let account = UserAccount::new(user, password_hash);
        self.users.insert(&account).await.map_err(map_user_error)?;

        let id = *account.user().id();
        info!(user_id = %id, "account created");
        Ok(id)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<SessionToken, Error> {
        let Some(account) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            let decoy = self.decoy_digest().await?;
            self.verify_password(credentials.password(), decoy).await?;
            debug!("login rejected: unknown email");
            return Err(Rejection::InvalidCredentials.into());
        };

        let verified = self
            .verify_password(credentials.password(), account.password_hash().clone())
            .await?;
        if !verified {
            debug!(user_id = %account.user().id(), "login rejected: password mismatch");
            return Err(Rejection::InvalidCredentials.into());
        }

        let token = self
            .tokens
            .issue(account.user().id())
            .map_err(|err| Error::internal(err.to_string()))?;
        info!(user_id = %account.user().id(), "session issued");
        Ok(token)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
