// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use components_backend::{
    build_app,
    config::{Config, StoreKind},
    database,
    state::AppState,
    store::{MemoryProductStore, PgProductStore, ProductStore},
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("components_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let store: Arc<dyn ProductStore> = match config.store {
        StoreKind::Postgres => match database::create_pool(&config.database_url).await {
            Ok(pool) => Arc::new(PgProductStore::new(pool)),
            Err(e) => {
                tracing::error!(error = %e, "Invalid DATABASE_URL");
                return;
            }
        },
        StoreKind::Memory => {
            tracing::warn!("Using in-memory product store; records are lost on exit");
            Arc::new(MemoryProductStore::new())
        }
    };

    let app = build_app(AppState::new(store));

    let addr = SocketAddr::from((config.host, config.port));
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return;
        }
    };
    tracing::info!(store = ?config.store, "Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}
