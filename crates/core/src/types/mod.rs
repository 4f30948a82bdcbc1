//! Shared type definitions.

pub mod discount;
pub mod id;
pub mod modifier;

pub use discount::{Discount, DiscountError, DiscountKind};
pub use id::{CategoryId, ProductId, StoreId, UserId};
pub use modifier::{Modifier, ModifierError, ModifierOption};
