//! Request middleware.

pub mod identity;

pub use identity::{CurrentUser, RequireAuth, attach_identity};
