//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Email uniqueness is arbitrated by the `users_email_key` unique index: a
//! racing insert fails with a unique violation, reported as
//! [`UserPersistenceError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, PasswordHash, User, UserAccount, UserId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed credential store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(failure: PoolError) -> UserPersistenceError {
    map_basic_pool_error(failure, UserPersistenceError::connection)
}

fn map_diesel_error(failure: diesel::result::Error) -> UserPersistenceError {
    if is_unique_violation(&failure) {
        return UserPersistenceError::duplicate_email();
    }
    map_basic_diesel_error(
        failure,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserPersistenceError> {
    let email = EmailAddress::new(&row.email)
        .map_err(|err| UserPersistenceError::query(format!("stored email is invalid: {err}")))?;
    let user = User::new(
        UserId::from(row.id),
        row.full_name,
        row.registration_number,
        email,
        row.branch,
    );
    Ok(UserAccount::new(
        user,
        PasswordHash::from_encoded(row.password_hash),
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user = account.user();
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            full_name: user.full_name(),
            registration_number: user.registration_number(),
            email: user.email().as_str(),
            password_hash: account.password_hash().as_encoded(),
            branch: user.branch(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_str()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_account).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row
            .map(row_to_account)
            .transpose()?
            .map(UserAccount::into_user))
    }
}

#[cfg(test)]
mod tests {
    use super::super::diesel_basic_error_mapping::database_error;
    use super::*;
    use diesel::result::DatabaseErrorKind;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn email_index_violation_is_a_duplicate_email() {
        let err = map_diesel_error(database_error(DatabaseErrorKind::UniqueViolation));
        assert_eq!(err, UserPersistenceError::DuplicateEmail);
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
        assert!(!err.to_string().contains("driver said no"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn row_converts_to_account_with_digest() {
        let row = UserRow {
            id: Uuid::nil(),
            full_name: "Ada Lovelace".to_owned(),
            registration_number: "21BCE0001".to_owned(),
            email: "ada@example.edu".to_owned(),
            password_hash: "$2b$10$digest".to_owned(),
            branch: "CSE".to_owned(),
        };
        let account = row_to_account(row).expect("valid row");
        assert_eq!(account.user().email().as_str(), "ada@example.edu");
        assert_eq!(account.password_hash().as_encoded(), "$2b$10$digest");
    }

    #[rstest]
    fn blank_stored_email_is_a_query_error() {
        let row = UserRow {
            id: Uuid::nil(),
            full_name: "Ada Lovelace".to_owned(),
            registration_number: "21BCE0001".to_owned(),
            email: "  ".to_owned(),
            password_hash: "$2b$10$digest".to_owned(),
            branch: "CSE".to_owned(),
        };
        assert!(matches!(
            row_to_account(row),
            Err(UserPersistenceError::Query { .. })
        ));
    }
}
