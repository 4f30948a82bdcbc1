//! Wire types for the shopfront API.
//!
//! These mirror the server's JSON bodies (camelCase names, decimal
//! prices serialized as strings).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_core::{CategoryId, Discount, Modifier, ProductId, StoreId, UserId};

/// A store as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: CategoryId,
    pub store: StoreId,
    pub stock: i32,
    pub image: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub discounts: Vec<Discount>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /stores`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Partial patch body for `PUT /stores/{id}`.
///
/// Absent fields are left out of the JSON entirely; the server keeps
/// the stored value for absent or empty-string fields.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body for `POST /products`, produced from a validated draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub category: CategoryId,
    pub store: StoreId,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub discounts: Vec<Discount>,
}

/// Partial patch body for `PUT /products/{id}`.
///
/// `modifiers`/`discounts`, when present, replace the stored arrays
/// wholesale (an empty vec clears them).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<Discount>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_store_patch_skips_absent_fields() {
        let patch = StorePatch {
            name: Some("Cafe Luna".to_string()),
            ..StorePatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Cafe Luna" }));
    }

    #[test]
    fn test_product_patch_empty_modifiers_serialized() {
        // An explicit empty array must reach the server (it clears the
        // stored modifiers); only absent fields are skipped.
        let patch = ProductPatch {
            modifiers: Some(vec![]),
            ..ProductPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "modifiers": [] }));
    }

    #[test]
    fn test_product_deserializes_decimal_string_price() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Latte",
            "description": null,
            "price": "4.5",
            "category": 2,
            "store": 3,
            "stock": 20,
            "image": null,
            "modifiers": [],
            "discounts": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.price.to_string(), "4.5");
        assert_eq!(product.stock, 20);
    }
}
