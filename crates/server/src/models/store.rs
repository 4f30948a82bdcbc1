//! Store domain model - a merchant location owned by exactly one identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{StoreId, UserId};

/// A merchant location entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Display name (never empty).
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Identity that created the store; immutable.
    pub owner: UserId,
    /// When the store was created.
    pub created_at: DateTime<Utc>,
    /// When the store was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new store. The owner comes from the authenticated
/// identity, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoreInput {
    /// Display name (required, non-empty).
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
}

/// Partial update for a store.
///
/// Fields follow the coalescing-by-non-emptiness policy: an omitted or
/// empty-string field leaves the stored value unchanged. Updating
/// `{"name": ""}` on a store named "Cafe" yields a store still named "Cafe".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStoreInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl UpdateStoreInput {
    /// Drop empty-string overrides so they coalesce to the stored value.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|s| !s.is_empty()),
            address: self.address.filter(|s| !s.is_empty()),
            phone: self.phone.filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_override_is_dropped() {
        let patch = UpdateStoreInput {
            name: Some(String::new()),
            address: Some("12 Main St".to_string()),
            phone: None,
        };
        let normalized = patch.normalized();
        assert_eq!(normalized.name, None);
        assert_eq!(normalized.address.as_deref(), Some("12 Main St"));
        assert_eq!(normalized.phone, None);
    }

    #[test]
    fn test_non_empty_overrides_survive() {
        let patch = UpdateStoreInput {
            name: Some("Cafe Luna".to_string()),
            address: Some(String::new()),
            phone: Some("555-0100".to_string()),
        };
        let normalized = patch.normalized();
        assert_eq!(normalized.name.as_deref(), Some("Cafe Luna"));
        assert_eq!(normalized.address, None);
        assert_eq!(normalized.phone.as_deref(), Some("555-0100"));
    }
}
