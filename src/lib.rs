pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router with request tracing.
pub fn build_app(state: AppState) -> Router {
    routes::create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
