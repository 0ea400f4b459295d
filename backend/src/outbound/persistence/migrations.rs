//! Embedded schema migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled in from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {message}")]
    Connect {
        /// Driver detail.
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Harness or task detail.
        message: String,
    },
}

/// Apply every pending migration on a dedicated synchronous connection.
///
/// Runs on the blocking pool; returns the number of migrations applied.
///
/// # Errors
///
/// Returns [`MigrationError::Connect`] when the database cannot be reached and
/// [`MigrationError::Apply`] when a migration fails.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut connection =
            PgConnection::establish(&url).map_err(|err| MigrationError::Connect {
                message: err.to_string(),
            })?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })?;
        Ok(applied.len())
    })
    .await
    .map_err(|err| MigrationError::Apply {
        message: err.to_string(),
    })?
    .inspect(|applied| info!(applied, "database migrations up to date"))
}
