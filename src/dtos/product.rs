// src/dtos/product.rs
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::product::{NewProduct, Product};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, price and type are required fields";
pub const INVALID_PRICE_MESSAGE: &str = "Price must be a positive number";

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub manufacturer: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct, AppError> {
        let name = non_blank(self.name);
        let product_type = non_blank(self.product_type);
        let price = self.price.filter(|p| p.is_finite());

        match (name, price, product_type) {
            (Some(name), Some(price), Some(product_type)) => Ok(NewProduct {
                name,
                price,
                product_type,
                manufacturer: self.manufacturer,
            }),
            _ => Err(AppError::validation(REQUIRED_FIELDS_MESSAGE)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePriceRequest {
    pub price: Option<f64>,
}

impl UpdatePriceRequest {
    /// Returns the price rounded to cents, rejecting anything that is not a positive number.
    pub fn validate(self) -> Result<f64, AppError> {
        match self.price {
            Some(price) if price.is_finite() && price > 0.0 => Ok(round_to_cents(price)),
            _ => Err(AppError::validation(INVALID_PRICE_MESSAGE)),
        }
    }
}

/// Rounds the exact binary value of `price` to two decimals, ties away from zero.
///
/// Values too large for `Decimal` are already whole numbers and pass through.
pub fn round_to_cents(price: f64) -> f64 {
    Decimal::from_f64_retain(price)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_string().parse().ok())
        .unwrap_or(price)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: &'static str,
    pub product: ProductResponse,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            product_type: product.product_type,
            manufacturer: product.manufacturer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: Option<&str>, price: Option<f64>, product_type: Option<&str>) -> CreateProductRequest {
        CreateProductRequest {
            name: name.map(str::to_string),
            price,
            product_type: product_type.map(str::to_string),
            manufacturer: None,
        }
    }

    #[test]
    fn create_request_accepts_required_fields() {
        let new = create(Some("Resistor"), Some(0.5), Some("passive")).validate().unwrap();
        assert_eq!(new.name, "Resistor");
        assert_eq!(new.price, 0.5);
        assert_eq!(new.product_type, "passive");
        assert_eq!(new.manufacturer, None);
    }

    #[test]
    fn create_request_keeps_price_as_submitted() {
        let new = create(Some("Capacitor"), Some(1.234), Some("passive")).validate().unwrap();
        assert_eq!(new.price, 1.234);
    }

    #[test]
    fn create_request_rejects_missing_or_blank_fields() {
        assert!(create(None, Some(1.0), Some("passive")).validate().is_err());
        assert!(create(Some("  "), Some(1.0), Some("passive")).validate().is_err());
        assert!(create(Some("Diode"), None, Some("active")).validate().is_err());
        assert!(create(Some("Diode"), Some(1.0), Some("")).validate().is_err());
        assert!(create(Some("Diode"), Some(f64::NAN), Some("active")).validate().is_err());
    }

    #[test]
    fn create_request_type_field_is_named_type() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"name":"LED","price":0.1,"type":"optoelectronic","manufacturer":"Kingbright"}"#,
        )
        .unwrap();
        assert_eq!(req.product_type.as_deref(), Some("optoelectronic"));
        assert_eq!(req.manufacturer.as_deref(), Some("Kingbright"));
    }

    #[test]
    fn string_price_is_not_a_number() {
        let parsed = serde_json::from_str::<CreateProductRequest>(
            r#"{"name":"LED","price":"0.1","type":"optoelectronic"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn update_price_rounds_to_two_decimals() {
        assert_eq!(UpdatePriceRequest { price: Some(19.999) }.validate().unwrap(), 20.0);
        assert_eq!(UpdatePriceRequest { price: Some(0.567) }.validate().unwrap(), 0.57);
        assert_eq!(UpdatePriceRequest { price: Some(3.0) }.validate().unwrap(), 3.0);
        // 0.015 and 2.675 sit just below the midpoint in binary
        assert_eq!(UpdatePriceRequest { price: Some(0.015) }.validate().unwrap(), 0.01);
        assert_eq!(UpdatePriceRequest { price: Some(2.675) }.validate().unwrap(), 2.67);
        assert_eq!(UpdatePriceRequest { price: Some(0.105) }.validate().unwrap(), 0.1);
        assert_eq!(UpdatePriceRequest { price: Some(0.155) }.validate().unwrap(), 0.15);
    }

    #[test]
    fn exact_midpoints_round_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(1.375), 1.38);
        assert_eq!(round_to_cents(1e30), 1e30);
    }

    #[test]
    fn update_price_rejects_non_positive() {
        assert!(UpdatePriceRequest { price: Some(0.0) }.validate().is_err());
        assert!(UpdatePriceRequest { price: Some(-4.2) }.validate().is_err());
        assert!(UpdatePriceRequest { price: None }.validate().is_err());
        assert!(UpdatePriceRequest { price: Some(f64::INFINITY) }.validate().is_err());
    }

    #[test]
    fn response_omits_unset_manufacturer() {
        let response = ProductResponse {
            id: Uuid::nil(),
            name: "Relay".into(),
            price: 2.5,
            product_type: "electromechanical".into(),
            manufacturer: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "electromechanical");
        assert!(json.get("manufacturer").is_none());
    }
}
