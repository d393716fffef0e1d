//! Application state and startup wiring.

use std::sync::Arc;

use anyhow::Context;
use folio_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use folio_core::returns::{ReturnsService, ReturnsServiceTrait};
use folio_core::users::{UserService, UserServiceTrait};
use folio_storage_sqlite::db;
use folio_storage_sqlite::portfolio::PortfolioRepository;
use folio_storage_sqlite::returns::ReturnsRepository;
use folio_storage_sqlite::users::UserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::auth::TokenIssuer;
use crate::config::Config;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub returns_service: Arc<dyn ReturnsServiceTrait>,
    pub token_issuer: TokenIssuer,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json_output = std::env::var("FOLIO_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Opens the database, runs migrations, starts the write actor and wires
/// the repositories into their services.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.uses_dev_secret() {
        tracing::warn!("FOLIO_JWT_SECRET is not set; using the development secret");
    }

    let db_path = db::init(&config.db_path).context("Failed to initialize database")?;
    let pool = db::create_pool(&db_path).context("Failed to create connection pool")?;
    db::run_migrations(&pool).context("Failed to run database migrations")?;
    let writer = db::spawn_writer(pool.clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let portfolio_repository = Arc::new(PortfolioRepository::new(pool.clone(), writer.clone()));
    let returns_repository = Arc::new(ReturnsRepository::new(pool, writer));

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository)),
        portfolio_service: Arc::new(PortfolioService::new(portfolio_repository)),
        returns_service: Arc::new(ReturnsService::new(returns_repository)),
        token_issuer: TokenIssuer::new(&config.jwt_secret, config.token_ttl_hours),
    };

    Ok(Arc::new(state))
}
