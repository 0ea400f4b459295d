//! Profile accessor: resolves a bearer token to the sanitised profile of its
//! subject.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::account_service::map_user_error;
use crate::domain::ports::{SessionTokenError, SessionTokens, UserProfileQuery, UserRepository};
use crate::domain::{BearerToken, Error, Rejection, User};

/// [`UserProfileQuery`] backed by the token issuer and the credential store.
#[derive(Clone)]
pub struct UserProfileService<R, T> {
    users: Arc<R>,
    tokens: Arc<T>,
}

impl<R, T> UserProfileService<R, T> {
    /// Create a new service with the given adapters.
    #[must_use]
    pub const fn new(users: Arc<R>, tokens: Arc<T>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl<R, T> UserProfileQuery for UserProfileService<R, T>
where
    R: UserRepository,
    T: SessionTokens,
{
    async fn fetch_profile(&self, token: &BearerToken) -> Result<User, Error> {
        let subject = self.tokens.verify(token.as_str()).map_err(|err| match err {
            SessionTokenError::Invalid => Error::from(Rejection::InvalidToken),
            SessionTokenError::Signing { message } => Error::internal(message),
        })?;

        // A valid signature for a removed account is still not a session.
        let user = self
            .users
            .find_by_id(&subject)
            .await
            .map_err(map_user_error)?;
        user.ok_or_else(|| {
            debug!(user_id = %subject, "token subject no longer exists");
            Rejection::InvalidToken.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockSessionTokens, MockUserRepository, UserPersistenceError};
    use crate::domain::{EmailAddress, ErrorCode, UserId};
    use rstest::rstest;

    fn bearer() -> BearerToken {
        BearerToken::from_authorization(Some("Bearer signed")).expect("bearer token")
    }

    fn make_service(
        users: MockUserRepository,
        tokens: MockSessionTokens,
    ) -> UserProfileService<MockUserRepository, MockSessionTokens> {
        UserProfileService::new(Arc::new(users), Arc::new(tokens))
    }

    #[rstest]
    #[tokio::test]
    async fn returns_profile_of_token_subject() {
        let subject = UserId::random();
        let user = User::new(
            subject,
            "Ada Lovelace",
            "21BCE0001",
            EmailAddress::new("ada@example.edu").expect("email"),
            "CSE",
        );
        let mut tokens = MockSessionTokens::new();
        tokens
            .expect_verify()
            .withf(|token| token == "signed")
            .return_once(move |_| Ok(subject));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .withf(move |id| *id == subject)
            .return_once(move |_| Ok(Some(user)));

        let profile = make_service(users, tokens)
            .fetch_profile(&bearer())
            .await
            .expect("profile");
        assert_eq!(profile.id(), &subject);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_token_never_touches_the_store() {
        let mut tokens = MockSessionTokens::new();
        tokens
            .expect_verify()
            .return_once(|_| Err(SessionTokenError::invalid()));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(0);

        let err = make_service(users, tokens)
            .fetch_profile(&bearer())
            .await
            .expect_err("invalid token");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Invalid token");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_subject_is_an_invalid_token() {
        let mut tokens = MockSessionTokens::new();
        tokens
            .expect_verify()
            .return_once(|_| Ok(UserId::random()));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|_| Ok(None));

        let err = make_service(users, tokens)
            .fetch_profile(&bearer())
            .await
            .expect_err("missing subject");
        assert_eq!(err.message(), "Invalid token");
    }

    #[rstest]
    #[tokio::test]
    async fn store_outage_is_internal() {
        let mut tokens = MockSessionTokens::new();
        tokens
            .expect_verify()
            .return_once(|_| Ok(UserId::random()));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .return_once(|_| Err(UserPersistenceError::connection("refused")));

        let err = make_service(users, tokens)
            .fetch_profile(&bearer())
            .await
            .expect_err("store down");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
