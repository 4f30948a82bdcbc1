//! Shopfront admin client.
//!
//! # Architecture
//!
//! - The server is source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for product lists, explicitly
//!   invalidated on mutation so a write is visible on the next read
//! - Store reads are never cached; the store list is always fresh
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_client::{AdminClient, drafts::ProductDraft};
//!
//! let client = AdminClient::new("http://localhost:4000", UserId::new(1));
//!
//! // Stores, newest first
//! let stores = client.list_stores().await?;
//!
//! // Build a product in a draft, validate, submit
//! let mut draft = ProductDraft::new(stores[0].id);
//! draft.name = "Latte".to_string();
//! draft.price = Decimal::new(45, 1);
//! let product = client.create_product(draft).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod drafts;
pub mod types;

pub use client::{AdminClient, IDENTITY_HEADER};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the shopfront API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API rejected the request; `message` is the server's
    /// `{"message": ...}` body when one was provided.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-provided error message.
        message: String,
    },

    /// A draft failed client-side validation before submission.
    #[error("invalid draft: {0}")]
    InvalidDraft(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 404,
            message: "Store not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): Store not found");
    }

    #[test]
    fn test_invalid_draft_display() {
        let err = ClientError::InvalidDraft("modifier needs at least one option".to_string());
        assert_eq!(
            err.to_string(),
            "invalid draft: modifier needs at least one option"
        );
    }
}
