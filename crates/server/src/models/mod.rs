//! Domain models and request inputs.

pub mod product;
pub mod store;

pub use product::{CreateProductInput, Product, ProductValidationError, UpdateProductInput};
pub use store::{CreateStoreInput, Store, UpdateStoreInput};
