//! PostgreSQL-backed `EventRegistrationRepository`.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::EventRegistration;
use crate::domain::ports::{EventRegistrationPersistenceError, EventRegistrationRepository};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewEventRegistrationRow;
use super::pool::DbPool;
use super::schema::event_registrations;

/// Diesel-backed registration store.
#[derive(Clone)]
pub struct DieselEventRegistrationRepository {
    pool: DbPool,
}

impl DieselEventRegistrationRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRegistrationRepository for DieselEventRegistrationRepository {
    async fn insert(
        &self,
        registration: &EventRegistration,
    ) -> Result<(), EventRegistrationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(|err| {
            map_basic_pool_error(err, EventRegistrationPersistenceError::connection)
        })?;
        let row = NewEventRegistrationRow {
            id: registration.id(),
            domain_preference: registration.domain_preference(),
            event_name: registration.event_name(),
            registered_at: registration.registered_at(),
        };

        diesel::insert_into(event_registrations::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    EventRegistrationPersistenceError::query,
                    EventRegistrationPersistenceError::connection,
                )
            })
    }
}
