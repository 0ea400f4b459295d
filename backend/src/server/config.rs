//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use vitmas::inbound::http::session_config::SessionSettings;
use vitmas::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Construct a configuration with in-memory stores and the system clock.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            db_pool: None,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, accounts and registrations are stored in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Replace the clock used for token expiry and registration timestamps.
    #[must_use]
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Clock injection is exercised by unit tests")
    )]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether a database pool is attached.
    #[must_use]
    pub const fn has_database(&self) -> bool {
        self.db_pool.is_some()
    }
}
