//! Server settings loaded via OrthoConfig.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Port used when neither `VITMAS_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 5000;
/// Unprefixed variable consulted when `VITMAS_PORT` is unset.
pub const PORT_ENV: &str = "PORT";
/// Interface used when `VITMAS_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Unprefixed variable consulted when `VITMAS_DATABASE_URL` is unset.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Failure to derive the listening address.
#[derive(Debug, thiserror::Error)]
pub enum BindAddrError {
    /// The configured host is not an IP address.
    #[error("host is not an IP address: {0}")]
    Host(#[from] AddrParseError),
    /// `PORT` held something other than a TCP port number.
    #[error("PORT is not a valid port number: {source}")]
    Port {
        /// Parse failure for the raw value.
        source: ParseIntError,
    },
}

/// Listener and store settings. Every field can come from CLI arguments or
/// `VITMAS_*` environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VITMAS")]
pub struct ServerSettings {
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// IP address to bind.
    pub host: Option<String>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl ServerSettings {
    /// Socket address to bind. The port comes from settings, else from
    /// `PORT`, else [`DEFAULT_PORT`]; the host defaults to `0.0.0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`BindAddrError`] when the host is not an IP address or
    /// `PORT` is not a port number.
    pub fn bind_addr<E: Env>(&self, env: &E) -> Result<SocketAddr, BindAddrError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).parse()?;
        Ok(SocketAddr::new(host, self.port(env)?))
    }

    fn port<E: Env>(&self, env: &E) -> Result<u16, BindAddrError> {
        if let Some(port) = self.port {
            return Ok(port);
        }
        env.string(PORT_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map_or(Ok(DEFAULT_PORT), |raw| {
                raw.trim()
                    .parse()
                    .map_err(|source| BindAddrError::Port { source })
            })
    }

    /// Database URL from settings, else from `DATABASE_URL`. Blank values
    /// count as unset.
    #[must_use]
    pub fn database_url<E: Env>(&self, env: &E) -> Option<String> {
        self.database_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| env.string(DATABASE_URL_ENV))
            .filter(|url| !url.trim().is_empty())
    }
}
