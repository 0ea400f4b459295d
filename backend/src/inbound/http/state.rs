//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountService, EventRegistrationCommand, FixtureAccountService,
    FixtureEventRegistrationCommand, FixtureUserProfileQuery, UserProfileQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Signup and login.
    pub accounts: Arc<dyn AccountService>,
    /// Bearer-authenticated profile lookup.
    pub profile: Arc<dyn UserProfileQuery>,
    /// Event registration.
    pub events: Arc<dyn EventRegistrationCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use vitmas::domain::ports::{
    ///     FixtureAccountService, FixtureEventRegistrationCommand, FixtureUserProfileQuery,
    /// };
    /// use vitmas::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureAccountService),
    ///     Arc::new(FixtureUserProfileQuery),
    ///     Arc::new(FixtureEventRegistrationCommand),
    /// );
    /// let _accounts = state.accounts.clone();
    /// ```
    #[must_use]
    pub const fn new(
        accounts: Arc<dyn AccountService>,
        profile: Arc<dyn UserProfileQuery>,
        events: Arc<dyn EventRegistrationCommand>,
    ) -> Self {
        Self {
            accounts,
            profile,
            events,
        }
    }

    /// State wired entirely to fixture ports.
    #[must_use]
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureAccountService),
            Arc::new(FixtureUserProfileQuery),
            Arc::new(FixtureEventRegistrationCommand),
        )
    }
}
