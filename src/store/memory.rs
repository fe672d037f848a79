use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProductStore, StoreError};
use crate::models::product::{NewProduct, Product};

/// In-process product store. Records are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        if product.name.trim().is_empty() || product.product_type.trim().is_empty() {
            return Err(StoreError::Rejected(
                "name and type must not be empty".to_string(),
            ));
        }

        let product = Product {
            id: Uuid::new_v4(),
            name: product.name,
            price: product.price,
            product_type: product.product_type,
            manufacturer: product.manufacturer,
            created_at: Utc::now(),
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update_price(&self, id: &str, price: f64) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|p| {
            p.price = price;
            p.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id = parse_id(id)?;
        let mut products = self.products.write().await;
        Ok(products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index)))
    }
}
