//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check (no auth)
//! GET  /health/ready           - Readiness check (no auth)
//!
//! # Stores (owner-scoped)
//! POST   /stores               - Create store
//! GET    /stores               - List caller's stores
//! GET    /stores/{id}          - Get store by id
//! PUT    /stores/{id}          - Update store (partial)
//! DELETE /stores/{id}          - Delete store (cascades to products)
//!
//! # Products (scoped through the owning store)
//! GET    /products/{store_id}  - List products for a store
//! POST   /products             - Create product
//! PUT    /products/{id}        - Update product (partial)
//! DELETE /products/{id}        - Delete product
//! ```
//!
//! All bodies are JSON; error responses are `{"message": <text>}`.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod products;
pub mod stores;

/// Build the application router (health routes are mounted in `main`).
pub fn routes() -> Router<AppState> {
    Router::new()
        // Stores
        .route("/stores", get(stores::list).post(stores::create))
        .route(
            "/stores/{id}",
            get(stores::get_by_id)
                .put(stores::update)
                .delete(stores::delete),
        )
        // Products - GET takes a store id, PUT/DELETE take a product id
        // (inherited route shape from the admin client contract)
        .route("/products", post(products::create))
        .route(
            "/products/{id}",
            get(products::list_by_store)
                .put(products::update)
                .delete(products::delete),
        )
}
