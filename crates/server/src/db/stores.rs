//! Store repository enforcing per-owner isolation.
//!
//! Every read and write is double-filtered on `id AND owner_id`; a miss on
//! either condition surfaces as `NotFound`, so a caller can never
//! distinguish "absent" from "owned by someone else".

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shopfront_core::{StoreId, UserId};

use super::RepositoryError;
use crate::models::store::{CreateStoreInput, Store, UpdateStoreInput};

/// Internal row type for store queries.
#[derive(Debug, sqlx::FromRow)]
struct StoreRow {
    id: i32,
    name: String,
    address: String,
    phone: String,
    owner_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Self {
            id: StoreId::new(row.id),
            name: row.name,
            address: row.address,
            phone: row.phone,
            owner: UserId::new(row.owner_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const STORE_COLUMNS: &str = "id, name, address, phone, owner_id, created_at, updated_at";

/// Repository for store database operations.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new store owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the name is empty.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        owner: UserId,
        input: &CreateStoreInput,
    ) -> Result<Store, RepositoryError> {
        if input.name.trim().is_empty() {
            return Err(RepositoryError::Validation(
                "store name is required".to_string(),
            ));
        }

        let row = sqlx::query_as::<_, StoreRow>(&format!(
            "INSERT INTO store (name, address, phone, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {STORE_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(owner.as_i32())
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// List all stores owned by `owner`, in insertion order.
    ///
    /// Presentation-layer sorting (newest first) is the client's concern,
    /// not a repository guarantee.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Store>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoreRow>(&format!(
            "SELECT {STORE_COLUMNS}
             FROM store
             WHERE owner_id = $1
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(owner.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a store by ID, scoped to `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store does not exist or
    /// belongs to a different owner.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, owner: UserId, id: StoreId) -> Result<Store, RepositoryError> {
        let row = sqlx::query_as::<_, StoreRow>(&format!(
            "SELECT {STORE_COLUMNS}
             FROM store
             WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id.as_i32())
        .bind(owner.as_i32())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Update a store, scoped to `owner`.
    ///
    /// Empty-string overrides are dropped before the update, so they
    /// coalesce to the stored value rather than clearing it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store does not exist or
    /// belongs to a different owner.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        owner: UserId,
        id: StoreId,
        input: UpdateStoreInput,
    ) -> Result<Store, RepositoryError> {
        let input = input.normalized();

        let row = sqlx::query_as::<_, StoreRow>(&format!(
            "UPDATE store
             SET name = COALESCE($3, name),
                 address = COALESCE($4, address),
                 phone = COALESCE($5, phone),
                 updated_at = now()
             WHERE id = $1 AND owner_id = $2
             RETURNING {STORE_COLUMNS}"
        ))
        .bind(id.as_i32())
        .bind(owner.as_i32())
        .bind(input.name)
        .bind(input.address)
        .bind(input.phone)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a store, scoped to `owner`. Products referencing the store
    /// are removed by the `ON DELETE CASCADE` constraint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store does not exist or
    /// belongs to a different owner (including a repeated delete).
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, owner: UserId, id: StoreId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store WHERE id = $1 AND owner_id = $2")
            .bind(id.as_i32())
            .bind(owner.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
