//! PostgreSQL-backed product store.
//!
//! | Failure | PostgreSQL code | `StoreError` |
//! |---------|-----------------|--------------|
//! | check constraint violation | `23514` | `Rejected` |
//! | not-null violation | `23502` | `Rejected` |
//! | invalid uuid text | `22P02` | `Database` |
//! | anything else | - | `Database` |

use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};
use tracing::instrument;

use super::{ProductStore, StoreError};
use crate::models::product::{NewProduct, Product};

const COLUMNS: &str = "id, name, price, product_type, manufacturer, created_at";

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_constraint_violation(err: SqlxError) -> StoreError {
    match err {
        SqlxError::Database(db_err)
            if matches!(db_err.code().as_deref(), Some("23514") | Some("23502")) =>
        {
            StoreError::Rejected(db_err.message().to_string())
        }
        other => other.into(),
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1::uuid"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self, product))]
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price, product_type, manufacturer)
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.product_type)
        .bind(&product.manufacturer)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    #[instrument(skip(self))]
    async fn update_price(&self, id: &str, price: f64) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET price = $1 WHERE id = $2::uuid RETURNING {COLUMNS}"
        ))
        .bind(price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "DELETE FROM products WHERE id = $1::uuid RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
