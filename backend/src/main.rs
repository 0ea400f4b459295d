//! Service entry-point: loads settings and the signing secret, prepares the
//! stores, and serves the HTTP API.

mod server;

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use vitmas::inbound::http::health::HealthState;
use vitmas::inbound::http::session_config::{BuildMode, SessionSettings, session_settings_from_env};
use vitmas::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, ServerSettings, create_server};

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

fn load_session_settings(env: &DefaultEnv) -> io::Result<SessionSettings> {
    let settings = session_settings_from_env(env, BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;
    info!(
        fingerprint = %settings.fingerprint(),
        source = ?settings.source(),
        "signing secret loaded"
    );
    Ok(settings)
}

async fn connect_database(url: String, max_size: Option<u32>) -> io::Result<DbPool> {
    let applied = run_pending_migrations(&url)
        .await
        .map_err(io::Error::other)?;
    info!(applied, "database schema ready");

    let mut pool_config = PoolConfig::new(url);
    if let Some(size) = max_size {
        pool_config = pool_config.with_max_size(size);
    }
    DbPool::new(pool_config).await.map_err(io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let env = DefaultEnv::new();
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|error| io::Error::other(error.to_string()))?;
    let session = load_session_settings(&env)?;
    let bind_addr = settings.bind_addr(&env).map_err(io::Error::other)?;

    let mut config = ServerConfig::new(session, bind_addr);
    if let Some(url) = settings.database_url(&env) {
        let pool = connect_database(url, settings.pool_max_size).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &config)?;
    info!(addr = %config.bind_addr(), database = config.has_database(), "listening");
    server.await
}
