//! Store route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;

use shopfront_core::StoreId;

use crate::{
    db::StoreRepository,
    error::{AppError, Result},
    middleware::RequireAuth,
    models::store::{CreateStoreInput, Store, UpdateStoreInput},
    state::AppState,
};

const STORE_NOT_FOUND: &str = "Store not found";

/// Create a store owned by the caller.
#[instrument(skip(user, state, input))]
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateStoreInput>,
) -> Result<(StatusCode, Json<Store>)> {
    let store = StoreRepository::new(state.pool())
        .create(user.id, &input)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    tracing::info!(store_id = %store.id, owner = %user.id, "Store created");
    Ok((StatusCode::CREATED, Json(store)))
}

/// List the caller's stores.
#[instrument(skip(user, state))]
pub async fn list(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Store>>> {
    let stores = StoreRepository::new(state.pool())
        .list_by_owner(user.id)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    Ok(Json(stores))
}

/// Get one of the caller's stores by id.
#[instrument(skip(user, state))]
pub async fn get_by_id(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<StoreId>,
) -> Result<Json<Store>> {
    let store = StoreRepository::new(state.pool())
        .get_by_id(user.id, id)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    Ok(Json(store))
}

/// Apply a partial update to one of the caller's stores.
#[instrument(skip(user, state, input))]
pub async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<StoreId>,
    Json(input): Json<UpdateStoreInput>,
) -> Result<Json<Store>> {
    let store = StoreRepository::new(state.pool())
        .update(user.id, id, input)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    tracing::info!(store_id = %store.id, "Store updated");
    Ok(Json(store))
}

/// Delete one of the caller's stores (products cascade).
#[instrument(skip(user, state))]
pub async fn delete(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<StoreId>,
) -> Result<Json<Value>> {
    StoreRepository::new(state.pool())
        .delete(user.id, id)
        .await
        .map_err(|e| AppError::from_repository(e, STORE_NOT_FOUND))?;

    tracing::info!(store_id = %id, "Store removed");
    Ok(Json(json!({ "message": "Store removed" })))
}
