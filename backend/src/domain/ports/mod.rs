//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod event_registration_command;
mod event_registration_repository;
mod password_hasher;
mod session_tokens;
mod user_profile_query;
mod user_repository;

pub use account_service::{AccountService, FixtureAccountService};
pub use event_registration_command::{EventRegistrationCommand, FixtureEventRegistrationCommand};
#[cfg(test)]
pub use event_registration_repository::MockEventRegistrationRepository;
pub use event_registration_repository::{
    EventRegistrationPersistenceError, EventRegistrationRepository,
};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use session_tokens::MockSessionTokens;
pub use session_tokens::{SessionTokenError, SessionTokens};
pub use user_profile_query::{FixtureUserProfileQuery, UserProfileQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
