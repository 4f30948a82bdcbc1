//! Product repository with store-scoped ownership checks.
//!
//! The original surface trusted the caller-supplied store association on
//! product writes. Here every operation re-derives store ownership from
//! the authenticated identity, so a caller can only touch products inside
//! stores they own; anything else is `NotFound`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use shopfront_core::{CategoryId, Discount, Modifier, ProductId, StoreId, UserId};

use super::RepositoryError;
use crate::models::product::{CreateProductInput, Product, UpdateProductInput};

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: Option<String>,
    price: Decimal,
    category_id: i32,
    store_id: i32,
    stock: i32,
    image: Option<String>,
    modifiers: Json<Vec<Modifier>>,
    discounts: Json<Vec<Discount>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category: CategoryId::new(row.category_id),
            store: StoreId::new(row.store_id),
            stock: row.stock,
            image: row.image,
            modifiers: row.modifiers.0,
            discounts: row.discounts.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, category_id, store_id, stock, \
                               image, modifiers, discounts, created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product inside a store owned by `owner`.
    ///
    /// The insert is gated on the store ownership check in a single
    /// statement, so a store deleted concurrently cannot be raced.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if any scalar or nested
    /// structure fails validation.
    /// Returns `RepositoryError::NotFound` if the target store does not
    /// exist or belongs to a different owner.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        owner: UserId,
        input: &CreateProductInput,
    ) -> Result<Product, RepositoryError> {
        input.validate()?;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO product
                 (name, description, price, category_id, store_id, stock, image,
                  modifiers, discounts)
             SELECT $1, $2, $3, $4, s.id, $6, $7, $8, $9
             FROM store s
             WHERE s.id = $5 AND s.owner_id = $10
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.category.as_i32())
        .bind(input.store.as_i32())
        .bind(input.stock)
        .bind(&input.image)
        .bind(Json(&input.modifiers))
        .bind(Json(&input.discounts))
        .bind(owner.as_i32())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// List products for a store owned by `owner`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store does not exist or
    /// belongs to a different owner.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_store(
        &self,
        owner: UserId,
        store_id: StoreId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let owns = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM store WHERE id = $1 AND owner_id = $2)",
        )
        .bind(store_id.as_i32())
        .bind(owner.as_i32())
        .fetch_one(self.pool)
        .await?;

        if !owns {
            return Err(RepositoryError::NotFound);
        }

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM product
             WHERE store_id = $1
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(store_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a product, scoped through its owning store to `owner`.
    ///
    /// Scalar string fields coalesce on non-emptiness; a supplied
    /// modifiers/discounts array replaces the stored one entirely (an
    /// empty array clears it). The store association never changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the patch fails validation.
    /// Returns `RepositoryError::NotFound` if the product does not exist
    /// or its store belongs to a different owner.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        owner: UserId,
        id: ProductId,
        input: UpdateProductInput,
    ) -> Result<Product, RepositoryError> {
        input.validate()?;
        let input = input.normalized();

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE product p
             SET name = COALESCE($3, p.name),
                 description = COALESCE($4, p.description),
                 price = COALESCE($5, p.price),
                 category_id = COALESCE($6, p.category_id),
                 stock = COALESCE($7, p.stock),
                 image = COALESCE($8, p.image),
                 modifiers = COALESCE($9, p.modifiers),
                 discounts = COALESCE($10, p.discounts),
                 updated_at = now()
             FROM store s
             WHERE p.id = $1 AND s.id = p.store_id AND s.owner_id = $2
             RETURNING p.id, p.name, p.description, p.price, p.category_id, p.store_id,
                       p.stock, p.image, p.modifiers, p.discounts, p.created_at, p.updated_at"
        ))
        .bind(id.as_i32())
        .bind(owner.as_i32())
        .bind(input.name)
        .bind(input.description)
        .bind(input.price)
        .bind(input.category.map(|c| c.as_i32()))
        .bind(input.stock)
        .bind(input.image)
        .bind(input.modifiers.map(Json))
        .bind(input.discounts.map(Json))
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a product, scoped through its owning store to `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist
    /// or its store belongs to a different owner (including a repeated
    /// delete).
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, owner: UserId, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM product p
             USING store s
             WHERE p.id = $1 AND s.id = p.store_id AND s.owner_id = $2",
        )
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
