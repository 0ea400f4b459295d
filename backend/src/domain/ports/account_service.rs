//! Driving port for signup and login use-cases.
//!
//! Inbound adapters call this port to create accounts and exchange
//! credentials for session tokens without importing the store, hasher, or
//! token infrastructure. HTTP handler tests substitute the fixture below.

use async_trait::async_trait;

use crate::domain::{
    Error, LoginCredentials, Rejection, SessionToken, SignupDetails, UserId,
};

/// Domain use-case port for account creation and authentication.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account and return its identifier.
    async fn signup(&self, details: SignupDetails) -> Result<UserId, Error>;

    /// Validate credentials and issue a session token.
    async fn login(&self, credentials: LoginCredentials) -> Result<SessionToken, Error>;
}

/// Deterministic account service for handler tests.
///
/// `taken@example.edu` is treated as already registered; login succeeds only
/// for `ada@example.edu` / `password`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountService;

impl FixtureAccountService {
    /// Identifier returned by every successful signup.
    pub const USER_ID: &'static str = "123e4567-e89b-12d3-a456-426614174000";
    /// Token returned by every successful login.
    pub const TOKEN: &'static str = "fixture-session-token";
}

#[async_trait]
impl AccountService for FixtureAccountService {
    async fn signup(&self, details: SignupDetails) -> Result<UserId, Error> {
        if details.email().as_str() == "taken@example.edu" {
            return Err(Rejection::DuplicateEmail.into());
        }
        UserId::new(Self::USER_ID)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<SessionToken, Error> {
        if credentials.email().as_str() == "ada@example.edu" && credentials.password() == "password"
        {
            Ok(SessionToken::new(Self::TOKEN))
        } else {
            Err(Rejection::InvalidCredentials.into())
        }
    }
}
