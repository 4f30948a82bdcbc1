//! Product domain model with nested modifier groups and discounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopfront_core::{CategoryId, Discount, DiscountError, Modifier, ModifierError, ProductId, StoreId};

/// Validation failures for product inputs.
///
/// Nested modifier/discount validation lives in the repository layer rather
/// than only in the client, so corrupt structures never reach the database.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("product name is required")]
    NameRequired,

    #[error("price must be non-negative")]
    NegativePrice,

    #[error("stock must be non-negative")]
    NegativeStock,

    #[error("{0}")]
    Modifier(#[from] ModifierError),

    #[error("{0}")]
    Discount(#[from] DiscountError),
}

/// A sellable item associated with one store and one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name (never empty).
    pub name: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Unit price (non-negative, exact decimal).
    pub price: Decimal,
    /// Category reference (the category entity lives outside this service).
    pub category: CategoryId,
    /// Owning store; immutable after creation.
    pub store: StoreId,
    /// Units in stock (non-negative).
    pub stock: i32,
    /// Optional image URL.
    pub image: Option<String>,
    /// Modifier groups, replaced wholesale on update.
    pub modifiers: Vec<Modifier>,
    /// Discounts, replaced wholesale on update.
    pub discounts: Vec<Discount>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new product within a store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub category: CategoryId,
    /// Target store; ownership is re-derived from the authenticated
    /// identity, never trusted from this field alone.
    pub store: StoreId,
    pub stock: i32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

impl CreateProductInput {
    /// Validate scalar constraints and all nested structures.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ProductValidationError`].
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::NameRequired);
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(ProductValidationError::NegativePrice);
        }
        if self.stock < 0 {
            return Err(ProductValidationError::NegativeStock);
        }
        validate_nested(&self.modifiers, &self.discounts)
    }
}

/// Partial update for a product.
///
/// String fields follow the coalescing-by-non-emptiness policy; numeric
/// fields use presence semantics (present means replace, so stock can be
/// set to 0). A supplied modifiers/discounts array replaces the stored one
/// entirely, including an empty array. There is deliberately no `store`
/// field: the association is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<CategoryId>,
    pub stock: Option<i32>,
    pub image: Option<String>,
    pub modifiers: Option<Vec<Modifier>>,
    pub discounts: Option<Vec<Discount>>,
}

impl UpdateProductInput {
    /// Drop empty-string overrides so they coalesce to the stored value.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|s| !s.is_empty()),
            description: self.description.filter(|s| !s.is_empty()),
            image: self.image.filter(|s| !s.is_empty()),
            ..self
        }
    }

    /// Validate scalar constraints and any nested structures present.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ProductValidationError`].
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if let Some(price) = self.price
            && price.is_sign_negative()
            && !price.is_zero()
        {
            return Err(ProductValidationError::NegativePrice);
        }
        if let Some(stock) = self.stock
            && stock < 0
        {
            return Err(ProductValidationError::NegativeStock);
        }
        validate_nested(
            self.modifiers.as_deref().unwrap_or_default(),
            self.discounts.as_deref().unwrap_or_default(),
        )
    }
}

fn validate_nested(
    modifiers: &[Modifier],
    discounts: &[Discount],
) -> Result<(), ProductValidationError> {
    for modifier in modifiers {
        modifier.validate()?;
    }
    for discount in discounts {
        discount.validate()?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shopfront_core::{DiscountKind, ModifierOption};

    fn latte_input() -> CreateProductInput {
        CreateProductInput {
            name: "Latte".to_string(),
            description: None,
            price: Decimal::new(45, 1),
            category: CategoryId::new(1),
            store: StoreId::new(1),
            stock: 20,
            image: None,
            modifiers: vec![],
            discounts: vec![],
        }
    }

    #[test]
    fn test_valid_create_input() {
        assert_eq!(latte_input().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut input = latte_input();
        input.name = "   ".to_string();
        assert_eq!(input.validate(), Err(ProductValidationError::NameRequired));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut input = latte_input();
        input.price = Decimal::new(-45, 1);
        assert_eq!(input.validate(), Err(ProductValidationError::NegativePrice));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let mut input = latte_input();
        input.stock = -1;
        assert_eq!(input.validate(), Err(ProductValidationError::NegativeStock));
    }

    #[test]
    fn test_free_product_allowed() {
        let mut input = latte_input();
        input.price = Decimal::ZERO;
        input.stock = 0;
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_modifier_rejected_at_create() {
        let mut input = latte_input();
        input.modifiers = vec![Modifier {
            name: "Size".to_string(),
            options: vec![],
        }];
        assert!(matches!(
            input.validate(),
            Err(ProductValidationError::Modifier(ModifierError::NoOptions(_)))
        ));
    }

    #[test]
    fn test_invalid_discount_rejected_at_update() {
        let patch = UpdateProductInput {
            discounts: Some(vec![Discount {
                name: "Backwards".to_string(),
                kind: DiscountKind::Percentage,
                value: Decimal::TEN,
                start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            }]),
            ..UpdateProductInput::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(ProductValidationError::Discount(
                DiscountError::EndBeforeStart(_)
            ))
        ));
    }

    #[test]
    fn test_update_normalization_drops_empty_strings() {
        let patch = UpdateProductInput {
            name: Some(String::new()),
            description: Some("Single origin".to_string()),
            stock: Some(0),
            ..UpdateProductInput::default()
        };
        let normalized = patch.normalized();
        assert_eq!(normalized.name, None);
        assert_eq!(normalized.description.as_deref(), Some("Single origin"));
        // Numeric fields keep presence semantics - zero is a real value
        assert_eq!(normalized.stock, Some(0));
    }

    #[test]
    fn test_update_with_valid_modifier_passes() {
        let patch = UpdateProductInput {
            modifiers: Some(vec![Modifier {
                name: "Milk".to_string(),
                options: vec![ModifierOption {
                    name: "Oat".to_string(),
                    price: Decimal::new(50, 2),
                }],
            }]),
            ..UpdateProductInput::default()
        };
        assert_eq!(patch.validate(), Ok(()));
    }
}
