//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `server` - REST backend for stores and products
//! - `client` - Admin API client consumed by the form UI
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs plus the nested
//!   modifier/discount value types shared by server and client.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
