//! Driving port for user profile queries.
//!
//! Inbound adapters pass the bearer token they extracted; the implementation
//! verifies it and loads the sanitised profile of its subject.

use async_trait::async_trait;

use crate::domain::{BearerToken, EmailAddress, Error, Rejection, User, UserId};

/// Domain use-case port for reading the caller's profile.
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile identified by `token`.
    async fn fetch_profile(&self, token: &BearerToken) -> Result<User, Error>;
}

/// Fixture profile query for handler tests.
///
/// Accepts only [`FixtureAccountService::TOKEN`](super::FixtureAccountService::TOKEN).
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserProfileQuery;

#[async_trait]
impl UserProfileQuery for FixtureUserProfileQuery {
    async fn fetch_profile(&self, token: &BearerToken) -> Result<User, Error> {
        if token.as_str() != super::FixtureAccountService::TOKEN {
            return Err(Rejection::InvalidToken.into());
        }
        let id = UserId::new(super::FixtureAccountService::USER_ID)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        let email = EmailAddress::new("ada@example.edu")
            .map_err(|err| Error::internal(format!("invalid fixture email: {err}")))?;
        Ok(User::new(id, "Ada Lovelace", "21BCE0001", email, "CSE"))
    }
}
