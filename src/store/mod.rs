//! Persistence seam for product records.
//!
//! Handlers only see [`ProductStore`]; the backing store is chosen at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::{NewProduct, Product};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the record (constraint or schema violation).
    #[error("product rejected by store: {0}")]
    Rejected(String),
    #[error("malformed product id: {0}")]
    MalformedId(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Single-document operations over the product collection.
///
/// Ids are passed through as received so that the store decides what a valid id is.
/// Lookups that match nothing return `Ok(None)`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
    async fn find(&self, id: &str) -> Result<Option<Product>, StoreError>;
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;
    async fn update_price(&self, id: &str, price: f64) -> Result<Option<Product>, StoreError>;
    async fn delete(&self, id: &str) -> Result<Option<Product>, StoreError>;
}
