//! Modifier groups attached to products.
//!
//! A modifier is a named group of selectable priced options (e.g. "Size"
//! with "Small +0.00" / "Large +1.50"). Modifiers are embedded in the
//! product document and replaced wholesale on update, never merged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a modifier group.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModifierError {
    /// Modifier name is empty.
    #[error("modifier name is required")]
    EmptyName,

    /// Modifier has no options.
    #[error("modifier '{0}' must have at least one option")]
    NoOptions(String),

    /// An option inside the modifier has an empty name.
    #[error("modifier '{0}': option name is required")]
    EmptyOptionName(String),

    /// An option inside the modifier has a negative price.
    #[error("modifier '{0}': option price must be non-negative")]
    NegativeOptionPrice(String),
}

/// A single selectable option within a modifier group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierOption {
    /// Display name (e.g. "Large").
    pub name: String,
    /// Price adjustment for selecting this option.
    pub price: Decimal,
}

/// A named group of selectable priced options attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Group name (e.g. "Size").
    pub name: String,
    /// Ordered options; a persisted modifier must have at least one.
    pub options: Vec<ModifierOption>,
}

impl Modifier {
    /// Validate the modifier for persistence.
    ///
    /// A modifier requires a non-empty name and at least one option; every
    /// option requires a name and a non-negative price.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ModifierError`].
    pub fn validate(&self) -> Result<(), ModifierError> {
        if self.name.trim().is_empty() {
            return Err(ModifierError::EmptyName);
        }
        if self.options.is_empty() {
            return Err(ModifierError::NoOptions(self.name.clone()));
        }
        for option in &self.options {
            if option.name.trim().is_empty() {
                return Err(ModifierError::EmptyOptionName(self.name.clone()));
            }
            if option.price.is_sign_negative() && !option.price.is_zero() {
                return Err(ModifierError::NegativeOptionPrice(self.name.clone()));
            }
        }
        Ok(())
    }
}
