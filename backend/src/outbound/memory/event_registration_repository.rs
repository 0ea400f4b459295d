//! Process-local registration store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::EventRegistration;
use crate::domain::ports::{EventRegistrationPersistenceError, EventRegistrationRepository};

/// Append-only [`EventRegistrationRepository`] backed by a vector.
#[derive(Default)]
pub struct InMemoryEventRegistrationRepository {
    registrations: Mutex<Vec<EventRegistration>>,
}

impl InMemoryEventRegistrationRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored registration, oldest first.
    pub fn snapshot(&self) -> Result<Vec<EventRegistration>, EventRegistrationPersistenceError> {
        self.registrations
            .lock()
            .map(|registrations| registrations.clone())
            .map_err(|_| {
                EventRegistrationPersistenceError::query("in-memory registration store poisoned")
            })
    }
}

#[async_trait]
impl EventRegistrationRepository for InMemoryEventRegistrationRepository {
    async fn insert(
        &self,
        registration: &EventRegistration,
    ) -> Result<(), EventRegistrationPersistenceError> {
        self.registrations
            .lock()
            .map_err(|_| {
                EventRegistrationPersistenceError::query("in-memory registration store poisoned")
            })?
            .push(registration.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewEventRegistration;
    use chrono::{DateTime, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    #[tokio::test]
    async fn duplicates_are_kept() {
        let repo = InMemoryEventRegistrationRepository::new();
        let registration = NewEventRegistration::try_from_parts(Some("web"), Some("hackathon"))
            .expect("request")
            .into_registration(Uuid::new_v4(), DateTime::<Utc>::UNIX_EPOCH);

        repo.insert(&registration).await.expect("first insert");
        repo.insert(&registration).await.expect("second insert");

        assert_eq!(repo.snapshot().expect("snapshot").len(), 2);
    }
}
