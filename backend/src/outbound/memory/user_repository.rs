//! Process-local credential store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserAccount, UserId};

#[derive(Default)]
struct Accounts {
    by_id: HashMap<UserId, UserAccount>,
    id_by_email: HashMap<EmailAddress, UserId>,
}

/// [`UserRepository`] over a single mutex-guarded map pair.
///
/// The uniqueness check and the insert happen under one lock, so racing
/// signups for one email resolve to exactly one stored account.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Accounts>,
}

impl InMemoryUserRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> Result<usize, UserPersistenceError> {
        Ok(self.lock()?.by_id.len())
    }

    /// Whether no account has been stored.
    pub fn is_empty(&self) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.by_id.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Accounts>, UserPersistenceError> {
        self.accounts
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut accounts = self.lock()?;
        let email = account.user().email().clone();
        if accounts.id_by_email.contains_key(&email) {
            return Err(UserPersistenceError::duplicate_email());
        }
        let id = *account.user().id();
        accounts.id_by_email.insert(email, id);
        accounts.by_id.insert(id, account.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let accounts = self.lock()?;
        Ok(accounts
            .id_by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .by_id
            .get(id)
            .map(|account| account.user().clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::PasswordHash;
    use rstest::rstest;

    fn account(email: &str) -> UserAccount {
        let user = User::new(
            UserId::random(),
            "Ada Lovelace",
            "21BCE0001",
            EmailAddress::new(email).expect("email"),
            "CSE",
        );
        UserAccount::new(user, PasswordHash::from_encoded("$2b$04$digest"))
    }

    #[rstest]
    #[tokio::test]
    async fn stored_accounts_are_found_by_email_and_id() {
        let repo = InMemoryUserRepository::new();
        let stored = account("ada@example.edu");
        repo.insert(&stored).await.expect("insert");

        let by_email = repo
            .find_by_email(stored.user().email())
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(by_email, stored);

        let by_id = repo
            .find_by_id(stored.user().id())
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(&by_id, stored.user());
    }

    #[rstest]
    #[tokio::test]
    async fn email_lookup_is_exact() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&account("ada@example.edu")).await.expect("insert");
        let other_case = EmailAddress::new("Ada@example.edu").expect("email");
        assert!(repo.find_by_email(&other_case).await.expect("lookup").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn second_insert_for_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&account("ada@example.edu")).await.expect("insert");
        let err = repo
            .insert(&account("ada@example.edu"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, UserPersistenceError::DuplicateEmail);
        assert_eq!(repo.len().expect("len"), 1);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_inserts_store_exactly_one_account() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let attempts = (0..16).map(|_| {
            let shared = Arc::clone(&repo);
            tokio::spawn(async move { shared.insert(&account("race@example.edu")).await })
        });
        let results = futures::future::join_all(attempts).await;
        let successes = results
            .into_iter()
            .map(|joined| joined.expect("task completes"))
            .filter(Result::is_ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(repo.len().expect("len"), 1);
    }
}
