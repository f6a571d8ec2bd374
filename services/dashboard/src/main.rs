mod config;
mod routes_datasets;
mod routes_pages;
mod state;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    // --- Startup checks (fail fast) ---
    startup_checks(&cfg)?;

    let app_state = Arc::new(AppState::new(cfg.clone()));

    let app = Router::new()
        .route("/", get(routes_pages::introduction))
        .route("/loading-code", get(routes_pages::loading_code))
        .route("/datasets", get(routes_datasets::list_datasets))
        .route("/datasets/:slug/audit", get(routes_datasets::audit_known_dataset))
        .route("/audit", post(routes_datasets::audit_uploaded_dataset))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = &cfg.bind_addr;
    println!("dashboard listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();

    Ok(())
}

fn startup_checks(cfg: &AppConfig) -> Result<()> {
    if !cfg.data_dir.is_dir() {
        anyhow::bail!("Data directory does not exist: {}", cfg.data_dir.display());
    }

    // Missing files are not fatal here; the audit routes report them per request.
    for kind in tabular::DatasetKind::ALL {
        let path = kind.path_in(&cfg.data_dir);
        if path.is_file() {
            info!("{}: ok ({})", kind.slug(), path.display());
        } else {
            warn!("{}: missing ({})", kind.slug(), path.display());
        }
    }
    Ok(())
}
