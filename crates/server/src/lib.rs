//! Shopfront server library.
//!
//! This crate provides the storefront management backend as a library,
//! allowing it to be tested and reused (the CLI borrows its config and
//! pool helpers).
//!
//! # Architecture
//!
//! - Axum web framework
//! - `PostgreSQL` for stores and products (nested modifiers and
//!   discounts live in JSONB columns)
//! - Identity arrives from a fronting auth proxy as a trusted header

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
