//! Event registrar: stamps sign-ups with the server clock and persists them.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::ports::{
    EventRegistrationCommand, EventRegistrationPersistenceError, EventRegistrationRepository,
};
use crate::domain::{Error, EventRegistration, NewEventRegistration};

/// [`EventRegistrationCommand`] over a registration store and a clock.
#[derive(Clone)]
pub struct EventRegistrationService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EventRegistrationService<R> {
    /// Create a new service.
    #[must_use]
    pub const fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_registration_error(failure: EventRegistrationPersistenceError) -> Error {
    match failure {
        EventRegistrationPersistenceError::Connection { message } => {
            error!(%message, "event registration repository unavailable");
            Error::internal(format!("event registration repository unavailable: {message}"))
        }
        EventRegistrationPersistenceError::Query { message } => {
            error!(%message, "event registration repository query failed");
            Error::internal(format!("event registration repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> EventRegistrationCommand for EventRegistrationService<R>
where
    R: EventRegistrationRepository,
{
    async fn register(&self, request: NewEventRegistration) -> Result<EventRegistration, Error> {
        let registration = request.into_registration(Uuid::new_v4(), self.clock.utc());
        self.repo
            .insert(&registration)
            .await
            .map_err(map_registration_error)?;
        info!(
            registration_id = %registration.id(),
            event = registration.event_name(),
            "event registration recorded"
        );
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockEventRegistrationRepository;
    use crate::test_support::clock::MutableClock;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn request() -> NewEventRegistration {
        NewEventRegistration::try_from_parts(Some("web"), Some("hackathon")).expect("request")
    }

    #[rstest]
    #[tokio::test]
    async fn stamps_registration_with_clock_time() {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let clock = MutableClock::new(now);
        let mut repo = MockEventRegistrationRepository::new();
        repo.expect_insert()
            .withf(move |registration| {
                registration.registered_at() == now && registration.event_name() == "hackathon"
            })
            .times(1)
            .return_once(|_| Ok(()));

        let service = EventRegistrationService::new(Arc::new(repo), Arc::new(clock));
        let registration = service.register(request()).await.expect("registered");
        assert_eq!(registration.registered_at(), now);
        assert_eq!(registration.domain_preference(), "web");
    }

    #[rstest]
    #[case(EventRegistrationPersistenceError::connection("refused"))]
    #[case(EventRegistrationPersistenceError::query("broken"))]
    #[tokio::test]
    async fn maps_store_failures_to_internal(#[case] failure: EventRegistrationPersistenceError) {
        let mut repo = MockEventRegistrationRepository::new();
        repo.expect_insert().return_once(move |_| Err(failure));

        let service = EventRegistrationService::new(Arc::new(repo), Arc::new(mockable::DefaultClock));
        let err = service.register(request()).await.expect_err("store fails");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
