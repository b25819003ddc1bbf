use std::{future::Future, net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::catalog::repo::seaorm::SeaOrmCatalogRepository;
use service::company::repo::seaorm::SeaOrmCompanyRepository;
use service::userservice::UserServiceClient;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Use `config.toml` (or `CONFIG_PATH`) when it exists, environment variables otherwise.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
    } else {
        warn!(%path, "config file not found, reading configuration from environment");
        AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Build the app from `cfg` and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrations applied");

    let users = UserServiceClient::new(cfg.user_service.base_url.clone(), cfg.user_service.timeout())?;
    info!(base_url = %users.base_url(), timeout_secs = cfg.user_service.timeout_secs, "user service client ready");

    let state = AppState::new(
        Arc::new(SeaOrmCompanyRepository { db: db.clone() }),
        Arc::new(users),
        Arc::new(SeaOrmCatalogRepository { db }),
        &cfg.auth.jwt_secret,
    );
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting seller service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("http server drained");
    Ok(())
}
