// src/database.rs
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

const MAX_CONNECTIONS: u32 = 10;

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
}

/// Connects and applies pending migrations.
///
/// If the database is unreachable the failure is logged and a lazily-connecting pool is
/// returned instead, so the server still starts and each request retries the connection.
/// Only a malformed URL is returned as an error.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    match pool_options().connect(database_url).await {
        Ok(pool) => {
            tracing::info!("Connected to database");
            if let Err(e) = sqlx::migrate!().run(&pool).await {
                tracing::error!(error = %e, "Failed to apply migrations");
            }
            Ok(pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            pool_options().connect_lazy(database_url)
        }
    }
}
