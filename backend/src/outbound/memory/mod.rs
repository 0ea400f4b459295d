//! In-memory store adapters.
//!
//! Used when no `DATABASE_URL` is configured and by HTTP-level tests. State
//! lives for the life of the process.

mod event_registration_repository;
mod user_repository;

pub use event_registration_repository::InMemoryEventRegistrationRepository;
pub use user_repository::InMemoryUserRepository;
