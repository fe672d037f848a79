use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub product_type: String,
    pub manufacturer: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Validated fields for a record that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub product_type: String,
    pub manufacturer: Option<String>,
}
