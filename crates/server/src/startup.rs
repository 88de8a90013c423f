use std::{net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig};
use migration::{Migrator, MigratorTrait};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::{info, warn};

use crate::admin::AdminGate;
use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::catalog::{repo::SeaOrmCatalogRepository, CatalogService};

/// `"*"` opens CORS fully; otherwise only the listed origins, with credentials.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    if cfg.allows_any() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| StartupError::InvalidConfig(format!("bad CORS origin: {o}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Wire the catalog over a live database and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<(Router, sea_orm::DatabaseConnection)> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        Migrator::up(&db, None).await?;
        info!(category = "startup", "migrations applied");
    }

    let repo = Arc::new(SeaOrmCatalogRepository::new(db.clone()));
    let catalog = CatalogService::new(repo).with_list_limit(cfg.catalog.list_limit);

    let admin = AdminGate::new(cfg.admin.api_key.clone());
    if !admin.is_enabled() {
        warn!(category = "startup", "ADMIN_API_KEY not set; POST /api/seed-data is open to any caller");
    }

    let cors = build_cors(&cfg.cors)?;
    let app = routes::build_router(ServerState::new(catalog, admin), cors);
    Ok((app, db))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(category = "startup", error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(category = "startup", "shutdown signal received");
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg)?;
    let (app, db) = build_app(&cfg).await?;

    info!(category = "startup", %addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!(category = "startup", "database pool closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origin_builds_permissive_layer() {
        let cfg = CorsConfig { allowed_origins: vec!["*".into()] };
        assert!(build_cors(&cfg).is_ok());
    }

    #[test]
    fn explicit_origins_are_parsed() {
        let cfg = CorsConfig { allowed_origins: vec!["https://exhibilo.com".into(), "http://localhost:3000".into()] };
        assert!(build_cors(&cfg).is_ok());
    }

    #[test]
    fn unparsable_origin_is_a_config_error() {
        let cfg = CorsConfig { allowed_origins: vec!["bad\norigin".into()] };
        assert!(matches!(build_cors(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn bind_address_comes_from_server_section() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 8001;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8001);
    }
}
