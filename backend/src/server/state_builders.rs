//! Builders wiring domain services onto PostgreSQL or in-memory adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;
use tracing::warn;

use vitmas::domain::ports::{EventRegistrationRepository, UserRepository};
use vitmas::domain::{AccountServiceImpl, EventRegistrationService, UserProfileService};
use vitmas::inbound::http::state::HttpState;
use vitmas::outbound::credentials::{BcryptPasswordHasher, JwtSessionTokens};
use vitmas::outbound::memory::{InMemoryEventRegistrationRepository, InMemoryUserRepository};
use vitmas::outbound::persistence::{DieselEventRegistrationRepository, DieselUserRepository};

use super::ServerConfig;

/// Build the HTTP state for `config`.
///
/// Uses Diesel repositories when a pool is attached, otherwise process-local
/// stores that vanish on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let tokens = Arc::new(JwtSessionTokens::new(
        config.session.secret(),
        Arc::clone(&config.clock),
    ));
    let hasher = Arc::new(BcryptPasswordHasher::new());
    let clock = Arc::clone(&config.clock);

    let Some(pool) = config.db_pool.as_ref() else {
        warn!("no database configured; accounts and registrations are kept in memory");
        return web::Data::new(assemble(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryEventRegistrationRepository::new()),
            hasher,
            tokens,
            clock,
        ));
    };
    web::Data::new(assemble(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselEventRegistrationRepository::new(pool.clone())),
        hasher,
        tokens,
        clock,
    ))
}

fn assemble<U, E>(
    users: Arc<U>,
    registrations: Arc<E>,
    hasher: Arc<BcryptPasswordHasher>,
    tokens: Arc<JwtSessionTokens>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    E: EventRegistrationRepository + 'static,
{
    HttpState::new(
        Arc::new(AccountServiceImpl::new(
            Arc::clone(&users),
            hasher,
            Arc::clone(&tokens),
        )),
        Arc::new(UserProfileService::new(users, tokens)),
        Arc::new(EventRegistrationService::new(registrations, clock)),
    )
}
