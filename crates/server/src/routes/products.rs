//! Product route handlers.
//!
//! All operations are scoped through the owning store: the caller only
//! ever sees products in stores they own, and a foreign store id behaves
//! exactly like a missing one.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use shopfront_core::{ProductId, StoreId};

use crate::{
    db::ProductRepository,
    error::{AppError, Result},
    middleware::RequireAuth,
    models::product::{CreateProductInput, Product, UpdateProductInput},
    state::AppState,
};

const PRODUCT_NOT_FOUND: &str = "Product not found";
const STORE_NOT_FOUND: &str = "Store not found";

/// Create a product inside one of the caller's stores.
#[instrument(skip(user, state, input))]
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductRepository::new(state.pool())
        .create(user.id, &input)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    tracing::info!(product_id = %product.id, store_id = %product.store, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// List products for one of the caller's stores.
#[instrument(skip(user, state))]
pub async fn list_by_store(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_by_store(user.id, store_id)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    Ok(Json(products))
}

/// Apply a partial update to a product in one of the caller's stores.
#[instrument(skip(user, state, input))]
pub async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(input): Json<UpdateProductInput>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(user.id, id, input)
        .await
        .map_err(|e| AppError::from_repository(e, PRODUCT_NOT_FOUND))?;

    tracing::info!(product_id = %product.id, "Product updated");
    Ok(Json(product))
}

/// Delete a product from one of the caller's stores.
#[instrument(skip(user, state))]
pub async fn delete(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool())
        .delete(user.id, id)
        .await
        .map_err(|e| AppError::from_repository(e, PRODUCT_NOT_FOUND))?;

    tracing::info!(product_id = %id, "Product removed");
    Ok(Json(json!({ "message": "Product removed" })))
}
