//! Time-boxed discounts attached to products.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for a percentage discount value.
const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Validation failures for a discount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// Discount name is empty.
    #[error("discount name is required")]
    EmptyName,

    /// Discount value is negative.
    #[error("discount '{0}': value must be non-negative")]
    NegativeValue(String),

    /// Percentage discount above 100.
    #[error("discount '{0}': percentage value must be at most 100")]
    PercentageOutOfRange(String),

    /// End date precedes start date.
    #[error("discount '{0}': end date must not precede start date")]
    EndBeforeStart(String),
}

/// How a discount value is applied to the product price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Value is a percentage of the price (0-100).
    Percentage,
    /// Value is a fixed amount subtracted from the price.
    Fixed,
}

/// A time-boxed price adjustment attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Display name (e.g. "New Year Sale").
    pub name: String,
    /// Percentage or fixed amount.
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    /// Discount value; semantics depend on `kind`.
    pub value: Decimal,
    /// First day the discount applies.
    pub start_date: NaiveDate,
    /// Last day the discount applies (inclusive).
    pub end_date: NaiveDate,
}

impl Discount {
    /// Validate the discount for persistence.
    ///
    /// Requires a name, a non-negative value (at most 100 for percentage
    /// discounts) and `end_date >= start_date`.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`DiscountError`].
    pub fn validate(&self) -> Result<(), DiscountError> {
        if self.name.trim().is_empty() {
            return Err(DiscountError::EmptyName);
        }
        if self.value.is_sign_negative() && !self.value.is_zero() {
            return Err(DiscountError::NegativeValue(self.name.clone()));
        }
        if self.kind == DiscountKind::Percentage && self.value > MAX_PERCENTAGE {
            return Err(DiscountError::PercentageOutOfRange(self.name.clone()));
        }
        if self.end_date < self.start_date {
            return Err(DiscountError::EndBeforeStart(self.name.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn january_sale() -> Discount {
        Discount {
            name: "January Sale".to_string(),
            kind: DiscountKind::Percentage,
            value: Decimal::new(10, 0),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[test]
    fn test_valid_discount() {
        assert_eq!(january_sale().validate(), Ok(()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut discount = january_sale();
        discount.name = String::new();
        assert_eq!(discount.validate(), Err(DiscountError::EmptyName));
    }

    #[test]
    fn test_negative_value_rejected() {
        let mut discount = january_sale();
        discount.value = Decimal::new(-5, 0);
        assert_eq!(
            discount.validate(),
            Err(DiscountError::NegativeValue("January Sale".to_string()))
        );
    }

    #[test]
    fn test_percentage_over_100_rejected() {
        let mut discount = january_sale();
        discount.value = Decimal::new(101, 0);
        assert_eq!(
            discount.validate(),
            Err(DiscountError::PercentageOutOfRange(
                "January Sale".to_string()
            ))
        );
    }

    #[test]
    fn test_fixed_value_over_100_allowed() {
        let mut discount = january_sale();
        discount.kind = DiscountKind::Fixed;
        discount.value = Decimal::new(250, 0);
        assert_eq!(discount.validate(), Ok(()));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut discount = january_sale();
        discount.end_date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(
            discount.validate(),
            Err(DiscountError::EndBeforeStart("January Sale".to_string()))
        );
    }

    #[test]
    fn test_single_day_discount_allowed() {
        let mut discount = january_sale();
        discount.end_date = discount.start_date;
        assert_eq!(discount.validate(), Ok(()));
    }

    #[test]
    fn test_wire_shape_matches_contract() {
        let json = serde_json::to_value(january_sale()).unwrap();
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-31");

        let fixed: Discount = serde_json::from_value(serde_json::json!({
            "name": "Two off",
            "type": "fixed",
            "value": "2.00",
            "startDate": "2024-06-01",
            "endDate": "2024-06-30",
        }))
        .unwrap();
        assert_eq!(fixed.kind, DiscountKind::Fixed);
    }
}
