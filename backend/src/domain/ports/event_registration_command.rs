//! Driving port for event sign-ups.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Error, EventRegistration, NewEventRegistration};

/// Domain use-case port for recording an event registration.
#[async_trait]
pub trait EventRegistrationCommand: Send + Sync {
    /// Persist the registration stamped with the server time.
    async fn register(&self, request: NewEventRegistration) -> Result<EventRegistration, Error>;
}

/// Fixture command that stamps registrations with the nil id and the epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventRegistrationCommand;

#[async_trait]
impl EventRegistrationCommand for FixtureEventRegistrationCommand {
    async fn register(&self, request: NewEventRegistration) -> Result<EventRegistration, Error> {
        Ok(request.into_registration(Uuid::nil(), DateTime::<Utc>::UNIX_EPOCH))
    }
}
