//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the domain schema wrappers from
//! [`crate::inbound::http::schemas`], and the bearer-token security scheme.
//! Paths are documented under `/api/auth`; the same handlers also answer at
//! the root. Swagger UI serves the document in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::accounts::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::inbound::http::events::{RegisterRequest, RegisterResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};

/// Name of the bearer security scheme.
pub const BEARER_SCHEME: &str = "bearer";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .description(Some("Token issued by POST /api/auth/login."))
            .build();
        components.add_security_scheme(BEARER_SCHEME, SecurityScheme::Http(scheme));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Vitmas API",
        description = "Student signup, bearer-token login, profile lookup and event registration.",
        license(name = "ISC", url = "https://opensource.org/licenses/ISC")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login,
        crate::inbound::http::profile::current_user,
        crate::inbound::http::events::register,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        SignupRequest,
        SignupResponse,
        LoginRequest,
        LoginResponse,
        RegisterRequest,
        RegisterResponse,
    )),
    tags(
        (name = "accounts", description = "Signup, login and profile"),
        (name = "events", description = "Event registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
