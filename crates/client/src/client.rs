//! Shopfront API client implementation.
//!
//! Uses `reqwest` for HTTP. Product lists are cached per store using
//! `moka` (5-minute TTL) and invalidated on mutation; store reads go to
//! the server every time.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use shopfront_core::{ProductId, StoreId, UserId};

use crate::ClientError;
use crate::drafts::ProductDraft;
use crate::types::{NewStore, Product, ProductPatch, Store, StorePatch};

/// Header carrying the caller's identity, consumed by the auth seam.
pub const IDENTITY_HEADER: &str = "x-shopfront-user";

/// Client for the shopfront management API.
///
/// Cheap to clone; all clones share one connection pool and one
/// product-list cache.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    base_url: String,
    identity: String,
    products: Cache<StoreId, Vec<Product>>,
}

impl AdminClient {
    /// Create a new client for `base_url` acting as `user`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, user: UserId) -> Self {
        let products = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.into().trim_end_matches('/').to_string(),
                identity: user.to_string(),
                products,
            }),
        }
    }

    /// Execute a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header(IDENTITY_HEADER, &self.inner.identity);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&response_text),
            });
        }

        Ok(serde_json::from_str(&response_text)?)
    }

    // =========================================================================
    // Store Methods
    // =========================================================================

    /// List the caller's stores, newest first.
    ///
    /// Always fetched fresh; store data is never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<Store>, ClientError> {
        let mut stores: Vec<Store> = self
            .execute(reqwest::Method::GET, "/stores", None::<&()>)
            .await?;
        // Display order: most recently created first
        stores.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(stores)
    }

    /// Create a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the store or the request fails.
    #[instrument(skip(self, store), fields(name = %store.name))]
    pub async fn create_store(&self, store: NewStore) -> Result<Store, ClientError> {
        self.execute(reqwest::Method::POST, "/stores", Some(&store))
            .await
    }

    /// Fetch one store by id.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the store does not
    /// exist or belongs to another owner.
    #[instrument(skip(self))]
    pub async fn get_store(&self, id: StoreId) -> Result<Store, ClientError> {
        self.execute(reqwest::Method::GET, &format!("/stores/{id}"), None::<&()>)
            .await
    }

    /// Apply a partial update to a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not found or the request fails.
    #[instrument(skip(self, patch))]
    pub async fn update_store(&self, id: StoreId, patch: StorePatch) -> Result<Store, ClientError> {
        self.execute(reqwest::Method::PUT, &format!("/stores/{id}"), Some(&patch))
            .await
    }

    /// Delete a store. Its products are removed with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not found or the request fails.
    #[instrument(skip(self))]
    pub async fn delete_store(&self, id: StoreId) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .execute(
                reqwest::Method::DELETE,
                &format!("/stores/{id}"),
                None::<&()>,
            )
            .await?;
        // Products cascade server-side; drop the stale list
        self.inner.products.invalidate(&id).await;
        Ok(())
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List the products of one of the caller's stores.
    ///
    /// Served from cache when fresh; any product mutation invalidates
    /// the affected store's entry.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the store does not
    /// exist or belongs to another owner.
    #[instrument(skip(self))]
    pub async fn list_products(&self, store: StoreId) -> Result<Vec<Product>, ClientError> {
        if let Some(products) = self.inner.products.get(&store).await {
            debug!("Cache hit for product list");
            return Ok(products);
        }

        let products: Vec<Product> = self
            .execute(
                reqwest::Method::GET,
                &format!("/products/{store}"),
                None::<&()>,
            )
            .await?;

        self.inner.products.insert(store, products.clone()).await;
        Ok(products)
    }

    /// Validate a draft and create the product.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidDraft` if the draft fails local
    /// validation, or an API error from the server.
    #[instrument(skip(self, draft), fields(store = %draft.store))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ClientError> {
        let body = draft.build()?;

        let product: Product = self
            .execute(reqwest::Method::POST, "/products", Some(&body))
            .await?;

        self.inner.products.invalidate(&product.store).await;
        Ok(product)
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ClientError> {
        let product: Product = self
            .execute(
                reqwest::Method::PUT,
                &format!("/products/{id}"),
                Some(&patch),
            )
            .await?;

        self.inner.products.invalidate(&product.store).await;
        Ok(product)
    }

    /// Delete a product.
    ///
    /// The response does not identify the owning store, so the whole
    /// product cache is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .execute(
                reqwest::Method::DELETE,
                &format!("/products/{id}"),
                None::<&()>,
            )
            .await?;

        self.inner.products.invalidate_all();
        Ok(())
    }
}

/// Pull the server's `{"message": ...}` out of an error body, falling
/// back to a truncated raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
