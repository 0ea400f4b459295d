//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every API handler is mounted twice: under `/api/auth` and at the root,
//! so clients written against either prefix keep working.

pub mod accounts;
pub mod error;
pub mod events;
pub mod health;
pub mod profile;
pub mod schemas;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// Prefix under which the API is also reachable.
pub const API_PREFIX: &str = "/api/auth";

/// Register the API handlers and JSON body configuration.
///
/// The caller supplies [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use vitmas::inbound::http::{configure, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::fixtures()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope(API_PREFIX)
                .service(accounts::signup)
                .service(accounts::login)
                .service(profile::current_user)
                .service(events::register),
        )
        .service(accounts::signup)
        .service(accounts::login)
        .service(profile::current_user)
        .service(events::register);
}
