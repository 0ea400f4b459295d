//! Port for event registration persistence.

use async_trait::async_trait;

use crate::domain::EventRegistration;

use super::define_port_error;

define_port_error! {
    /// Errors raised by event registration repository adapters.
    pub enum EventRegistrationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "event registration repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "event registration repository query failed: {message}",
    }
}

/// Append-only store for event registrations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRegistrationRepository: Send + Sync {
    /// Persist a registration.
    async fn insert(
        &self,
        registration: &EventRegistration,
    ) -> Result<(), EventRegistrationPersistenceError>;
}
