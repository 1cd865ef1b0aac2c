mod analysis;
mod catalog;
mod config;
mod errors;
mod extraction;
mod models;
mod recommend;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::resources::ResourceCatalog;
use crate::catalog::roles::RoleCatalog;
use crate::config::Config;
use crate::extraction::text::{PdfTextExtractor, TextExtractor};
use crate::routes::build_router;
use crate::routes::resumes::MAX_UPLOAD_BYTES;
use crate::state::AppState;
use crate::store::users::UserStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Gap Finder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the flat-file stores; each owns one document and one lock
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;
    let lock_timeout = config.store_lock_timeout();
    let users = UserStore::new(config.data_dir.join("users.json"), lock_timeout);
    let roles = RoleCatalog::new(config.data_dir.join("roles.json"), lock_timeout);
    let resources = ResourceCatalog::new(config.data_dir.join("resources.json"), lock_timeout);

    // Seed the static catalogs up front rather than on first access
    if roles.seed_defaults().await? {
        info!("Seeded default role catalog");
    }
    if resources.seed_defaults().await? {
        info!("Seeded default learning-resource catalog");
    }
    info!("Stores ready in {}", config.data_dir.display());

    // Initialize the PDF text extractor
    let extractor: Arc<dyn TextExtractor> = Arc::new(PdfTextExtractor);

    // Build app state
    let state = AppState {
        extractor,
        users,
        roles,
        resources,
    };

    // Build router; multipart bodies default to 2 MB, so raise the body
    // limit above the per-file cap enforced in the upload handler
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
