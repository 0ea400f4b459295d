//! Shared Diesel error mapping for the repositories in this module.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Whether the failure is a unique-constraint violation.
#[must_use]
pub const fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Driver detail is logged at debug level and replaced with a fixed message
/// so schema details never reach the domain error.
pub fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(source) => {
            debug!(error = %source, "diesel query could not be built");
            query("database query error")
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            match kind {
                DatabaseErrorKind::ClosedConnection => connection("database connection error"),
                DatabaseErrorKind::UniqueViolation => query("unique constraint violated"),
                _ => query("database error"),
            }
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            query("database error")
        }
    }
}

/// Build a driver error of `kind` for adapter tests.
#[cfg(test)]
pub(super) fn database_error(kind: DatabaseErrorKind) -> DieselError {
    DieselError::DatabaseError(kind, Box::new(test_info::Info("driver said no")))
}
