//! Student accounts, bearer sessions and event registration.
//!
//! The crate follows a hexagonal layout: [`domain`] holds types, ports and
//! services; [`inbound`] adapts HTTP requests onto driving ports; and
//! [`outbound`] implements driven ports over PostgreSQL, bcrypt and JWT.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
