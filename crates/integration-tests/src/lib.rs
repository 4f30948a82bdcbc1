//! Integration test support for shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p shopfront-cli -- migrate
//!
//! # Start the server
//! cargo run -p shopfront-server
//!
//! # Run the ignored HTTP tests
//! cargo test -p shopfront-integration-tests -- --ignored
//! ```
//!
//! Every test acts as a freshly generated user id, so tests are
//! isolated from each other and safe to re-run against the same
//! database.

use reqwest::{Client, Method, Response};
use serde::Serialize;
use uuid::Uuid;

use shopfront_client::IDENTITY_HEADER;
use shopfront_core::UserId;

/// Base URL for the shopfront API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHOPFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Generate a user id that no other test run is using.
#[must_use]
pub fn unique_user() -> UserId {
    let id = i32::try_from(Uuid::new_v4().as_u128() % 1_000_000_000).expect("id in range");
    UserId::new(id)
}

/// A caller identity bound to an HTTP client.
pub struct TestUser {
    pub id: UserId,
    client: Client,
    base_url: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUser {
    /// A fresh identity talking to the configured server.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: unique_user(),
            client: Client::new(),
            base_url: base_url(),
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Response {
        let mut request = self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .header(IDENTITY_HEADER, self.id.to_string());
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.expect("request failed")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post(&self, path: &str, body: &impl Serialize) -> Response {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &impl Serialize) -> Response {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.request(Method::DELETE, path, None::<&()>).await
    }
}
