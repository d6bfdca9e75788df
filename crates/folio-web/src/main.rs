use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::Method;
use axum::routing::get;
use folio_core::Catalog;
use folio_core::config_file;
use folio_reporting::RenderOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod handlers;
mod models;
mod state;
mod template;

use state::AppState;

fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/publications", get(handlers::api::publications))
        .route("/categories", get(handlers::api::categories))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/publications", get(handlers::publications::fragment))
        .nest("/api", api)
        .with_state(state)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config_file::load_config();

    let catalog_path = std::env::var("FOLIO_CATALOG")
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.catalog_path());
    let catalog = Catalog::resolve(catalog_path.as_deref()).with_context(|| match &catalog_path {
        Some(p) => format!("Failed to load catalog from {}", p.display()),
        None => "Built-in catalog is invalid".to_string(),
    })?;

    let default_selection = config
        .initial_selection()
        .context("Invalid [display] defaults in config")?;

    let state = Arc::new(AppState {
        catalog,
        options: RenderOptions::from_config(&config),
        default_selection,
    });

    let bind = std::env::var("FOLIO_BIND").unwrap_or_else(|_| config.bind());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", bind))?;

    tracing::info!(
        %addr,
        publications = state.catalog.publications.len(),
        "listening on http://{addr}"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
