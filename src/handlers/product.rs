// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument, warn};

use crate::dtos::product::{
    CreateProductRequest, DeleteProductResponse, ProductResponse, UpdatePriceRequest,
    INVALID_PRICE_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};
use crate::error::AppError;
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Product not found";

// GET /products - List all products
#[instrument(skip(store))]
pub async fn get_products(
    State(AppState { store }): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match store.list().await {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(AppError::server("Failed to fetch products"))
        }
    }
}

// GET /products/:id - Get single product
#[instrument(skip(store))]
pub async fn get_product(
    Path(id): Path<String>,
    State(AppState { store }): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = store
        .find(&id)
        .await
        .map_err(|e| {
            error!(?e, "Failed to fetch product");
            AppError::server("Error fetching product")
        })?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(store, payload))]
pub async fn create_product(
    State(AppState { store }): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejected product body");
        AppError::validation(REQUIRED_FIELDS_MESSAGE)
    })?;
    let new_product = payload.validate()?;

    let product = store.insert(new_product).await.map_err(|e| {
        error!(?e, "Failed to add product");
        AppError::validation_with_cause("Failed to add product", e)
    })?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PATCH|PUT /products/:id - Update product price
#[instrument(skip(store, payload))]
pub async fn update_product_price(
    Path(id): Path<String>,
    State(AppState { store }): State<AppState>,
    payload: Result<Json<UpdatePriceRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejected price body");
        AppError::validation(INVALID_PRICE_MESSAGE)
    })?;
    let price = payload.validate()?;

    let product = store
        .update_price(&id, price)
        .await
        .map_err(|e| {
            error!(?e, "Failed to update product");
            AppError::server("Failed to update product")
        })?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/:id - Delete product
#[instrument(skip(store))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(AppState { store }): State<AppState>,
) -> Result<Json<DeleteProductResponse>, AppError> {
    let product = store
        .delete(&id)
        .await
        .map_err(|e| {
            error!(?e, "Failed to delete product");
            AppError::server("Failed to delete product")
        })?
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(DeleteProductResponse {
        message: "Product deleted successfully",
        product: ProductResponse::from(product),
    }))
}
