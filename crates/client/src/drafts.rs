//! Editable draft objects for building products form-style.
//!
//! A draft is a plain value object: construct one fresh for "add",
//! mutate its fields freely, then `build()` it into a request body.
//! Validation mirrors the server's rules so a submitted draft is not
//! bounced for something the form could have caught locally.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopfront_core::{CategoryId, Discount, DiscountKind, Modifier, ModifierOption, StoreId};

use crate::ClientError;
use crate::types::NewProduct;

/// One option row of a modifier being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionDraft {
    pub name: String,
    pub price: Decimal,
}

/// A modifier group being edited (e.g. "Size" with its options).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierDraft {
    pub name: String,
    pub options: Vec<OptionDraft>,
}

impl ModifierDraft {
    /// Validate and convert into the wire representation.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidDraft` when the modifier would be
    /// rejected by the server (empty name, no options, a nameless
    /// option, or a negative option price).
    pub fn build(&self) -> Result<Modifier, ClientError> {
        let modifier = Modifier {
            name: self.name.trim().to_string(),
            options: self
                .options
                .iter()
                .map(|o| ModifierOption {
                    name: o.name.trim().to_string(),
                    price: o.price,
                })
                .collect(),
        };
        modifier
            .validate()
            .map_err(|e| ClientError::InvalidDraft(e.to_string()))?;
        Ok(modifier)
    }
}

/// A discount being edited.
///
/// Dates start out unset; both must be chosen before the draft builds.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDraft {
    pub name: String,
    pub kind: DiscountKind,
    pub value: Decimal,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for DiscountDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: DiscountKind::Percentage,
            value: Decimal::ZERO,
            start_date: None,
            end_date: None,
        }
    }
}

impl DiscountDraft {
    /// Validate and convert into the wire representation.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidDraft` when a date is missing or
    /// the discount would be rejected by the server.
    pub fn build(&self) -> Result<Discount, ClientError> {
        let start_date = self
            .start_date
            .ok_or_else(|| ClientError::InvalidDraft("discount needs a start date".to_string()))?;
        let end_date = self
            .end_date
            .ok_or_else(|| ClientError::InvalidDraft("discount needs an end date".to_string()))?;

        let discount = Discount {
            name: self.name.trim().to_string(),
            kind: self.kind,
            value: self.value,
            start_date,
            end_date,
        };
        discount
            .validate()
            .map_err(|e| ClientError::InvalidDraft(e.to_string()))?;
        Ok(discount)
    }
}

/// A product being created for a specific store.
///
/// The target store is fixed at construction; everything else is
/// editable until `build()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub store: StoreId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Option<CategoryId>,
    pub stock: i32,
    pub image: String,
    pub modifiers: Vec<ModifierDraft>,
    pub discounts: Vec<DiscountDraft>,
}

impl ProductDraft {
    /// Start an empty draft targeting `store`.
    #[must_use]
    pub fn new(store: StoreId) -> Self {
        Self {
            store,
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            category: None,
            stock: 0,
            image: String::new(),
            modifiers: Vec::new(),
            discounts: Vec::new(),
        }
    }

    /// Check the draft without building a body.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProductDraft::build`].
    pub fn validate(&self) -> Result<(), ClientError> {
        self.clone().build().map(|_| ())
    }

    /// Validate and convert into a `POST /products` body.
    ///
    /// Empty `description`/`image` strings are submitted as absent.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidDraft` when the product would be
    /// rejected by the server.
    pub fn build(self) -> Result<NewProduct, ClientError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ClientError::InvalidDraft(
                "product name is required".to_string(),
            ));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(ClientError::InvalidDraft(
                "price cannot be negative".to_string(),
            ));
        }
        if self.stock < 0 {
            return Err(ClientError::InvalidDraft(
                "stock cannot be negative".to_string(),
            ));
        }
        let category = self
            .category
            .ok_or_else(|| ClientError::InvalidDraft("product needs a category".to_string()))?;

        let modifiers = self
            .modifiers
            .iter()
            .map(ModifierDraft::build)
            .collect::<Result<Vec<_>, _>>()?;
        let discounts = self
            .discounts
            .iter()
            .map(DiscountDraft::build)
            .collect::<Result<Vec<_>, _>>()?;

        let description = (!self.description.trim().is_empty()).then(|| self.description.clone());
        let image = (!self.image.trim().is_empty()).then(|| self.image.clone());

        Ok(NewProduct {
            name,
            description,
            price: self.price,
            category,
            store: self.store,
            stock: self.stock,
            image,
            modifiers,
            discounts,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn latte_draft() -> ProductDraft {
        let mut draft = ProductDraft::new(StoreId::new(1));
        draft.name = "Latte".to_string();
        draft.price = Decimal::new(45, 1); // 4.5
        draft.category = Some(CategoryId::new(2));
        draft.stock = 20;
        draft
    }

    #[test]
    fn test_minimal_draft_builds() {
        let body = latte_draft().build().unwrap();
        assert_eq!(body.name, "Latte");
        assert_eq!(body.price.to_string(), "4.5");
        assert_eq!(body.description, None);
        assert!(body.modifiers.is_empty());
    }

    #[test]
    fn test_draft_requires_name() {
        let mut draft = latte_draft();
        draft.name = "   ".to_string();
        assert!(matches!(draft.build(), Err(ClientError::InvalidDraft(_))));
    }

    #[test]
    fn test_draft_requires_category() {
        let mut draft = latte_draft();
        draft.category = None;
        assert!(matches!(draft.build(), Err(ClientError::InvalidDraft(_))));
    }

    #[test]
    fn test_draft_rejects_negative_stock() {
        let mut draft = latte_draft();
        draft.stock = -1;
        assert!(matches!(draft.build(), Err(ClientError::InvalidDraft(_))));
    }

    #[test]
    fn test_modifier_draft_needs_options() {
        let mut draft = latte_draft();
        draft.modifiers.push(ModifierDraft {
            name: "Size".to_string(),
            options: vec![],
        });
        assert!(matches!(draft.build(), Err(ClientError::InvalidDraft(_))));
    }

    #[test]
    fn test_modifier_draft_builds() {
        let modifier = ModifierDraft {
            name: "Size".to_string(),
            options: vec![
                OptionDraft {
                    name: "Small".to_string(),
                    price: Decimal::ZERO,
                },
                OptionDraft {
                    name: "Large".to_string(),
                    price: Decimal::new(150, 2),
                },
            ],
        }
        .build()
        .unwrap();
        assert_eq!(modifier.options.len(), 2);
        assert_eq!(modifier.options[1].price.to_string(), "1.50");
    }

    #[test]
    fn test_discount_draft_needs_both_dates() {
        let draft = DiscountDraft {
            name: "Summer".to_string(),
            value: Decimal::new(10, 0),
            start_date: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            ..DiscountDraft::default()
        };
        assert!(matches!(draft.build(), Err(ClientError::InvalidDraft(_))));
    }

    #[test]
    fn test_discount_draft_builds_percentage() {
        let discount = DiscountDraft {
            name: "Summer".to_string(),
            kind: DiscountKind::Percentage,
            value: Decimal::new(10, 0),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31),
        }
        .build()
        .unwrap();
        assert_eq!(discount.kind, DiscountKind::Percentage);
    }

    #[test]
    fn test_discount_draft_rejects_reversed_dates() {
        let draft = DiscountDraft {
            name: "Summer".to_string(),
            kind: DiscountKind::Fixed,
            value: Decimal::ONE,
            start_date: NaiveDate::from_ymd_opt(2024, 8, 31),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        };
        assert!(matches!(draft.build(), Err(ClientError::InvalidDraft(_))));
    }
}
