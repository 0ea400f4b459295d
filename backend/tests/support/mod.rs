//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real domain services over in-memory stores, a low-cost bcrypt
//! hasher, and a controllable clock, then mounts them the way the server does.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};
use vitmas::Trace;
use vitmas::domain::{AccountServiceImpl, EventRegistrationService, UserProfileService};
use vitmas::inbound::http::configure;
use vitmas::inbound::http::state::HttpState;
use vitmas::outbound::credentials::{BcryptPasswordHasher, JwtSessionTokens};
use vitmas::outbound::memory::{InMemoryEventRegistrationRepository, InMemoryUserRepository};
use vitmas::test_support::clock::MutableClock;
use vitmas::test_support::secrets::SIGNING_SECRET;

/// Adapters behind an assembled [`HttpState`], kept for assertions.
pub struct Stack {
    pub state: web::Data<HttpState>,
    pub users: Arc<InMemoryUserRepository>,
    pub registrations: Arc<InMemoryEventRegistrationRepository>,
    pub clock: Arc<MutableClock>,
}

/// Fixed starting instant for the test clock.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Wire the production services over in-memory adapters.
pub fn in_memory_stack() -> Stack {
    let users = Arc::new(InMemoryUserRepository::new());
    let registrations = Arc::new(InMemoryEventRegistrationRepository::new());
    let clock = Arc::new(MutableClock::new(start_time()));
    let dyn_clock: Arc<dyn Clock> = clock.clone();
    let tokens = Arc::new(JwtSessionTokens::new(
        SIGNING_SECRET.as_bytes(),
        Arc::clone(&dyn_clock),
    ));
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));

    let state = HttpState::new(
        Arc::new(AccountServiceImpl::new(
            Arc::clone(&users),
            hasher,
            Arc::clone(&tokens),
        )),
        Arc::new(UserProfileService::new(Arc::clone(&users), tokens)),
        Arc::new(EventRegistrationService::new(
            Arc::clone(&registrations),
            dyn_clock,
        )),
    );

    Stack {
        state: web::Data::new(state),
        users,
        registrations,
        clock,
    }
}

/// App mounting every API route over `state`.
pub fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).wrap(Trace).configure(configure)
}

/// A complete signup body for `email`.
pub fn signup_body(email: &str) -> Value {
    json!({
        "fullname": "Ada Lovelace",
        "regno": "21BCE0001",
        "email": email,
        "password": "analytical-engine",
        "branch": "CSE"
    })
}
