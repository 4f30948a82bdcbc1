//! Seed the database with demo data.
//!
//! Creates a demo coffee shop with a couple of products so a fresh
//! environment has something to look at. Safe to run repeatedly; each
//! run creates new rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopfront_core::{CategoryId, Discount, DiscountKind, Modifier, ModifierOption, UserId};
use shopfront_server::config::ServerConfig;
use shopfront_server::db::{self, ProductRepository, StoreRepository};
use shopfront_server::models::product::CreateProductInput;
use shopfront_server::models::store::CreateStoreInput;

use super::CommandError;

/// Seed demo stores and products for `owner`.
pub async fn run(owner: i32) -> Result<(), CommandError> {
    let config = ServerConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    let owner = UserId::new(owner);

    let store = StoreRepository::new(&pool)
        .create(
            owner,
            &CreateStoreInput {
                name: "Cafe Luna".to_string(),
                address: "12 Harbor Street".to_string(),
                phone: "555-0101".to_string(),
            },
        )
        .await?;
    tracing::info!(store_id = %store.id, "Seeded store");

    let products = ProductRepository::new(&pool);

    let latte = products
        .create(
            owner,
            &CreateProductInput {
                name: "Latte".to_string(),
                description: Some("Double shot with steamed milk".to_string()),
                price: Decimal::new(45, 1),
                category: CategoryId::new(1),
                store: store.id,
                stock: 20,
                image: None,
                modifiers: vec![Modifier {
                    name: "Size".to_string(),
                    options: vec![
                        ModifierOption {
                            name: "Small".to_string(),
                            price: Decimal::ZERO,
                        },
                        ModifierOption {
                            name: "Large".to_string(),
                            price: Decimal::new(75, 2),
                        },
                    ],
                }],
                discounts: vec![],
            },
        )
        .await?;
    tracing::info!(product_id = %latte.id, "Seeded product");

    let cold_brew = products
        .create(
            owner,
            &CreateProductInput {
                name: "Cold Brew".to_string(),
                description: None,
                price: Decimal::new(40, 1),
                category: CategoryId::new(1),
                store: store.id,
                stock: 12,
                image: None,
                modifiers: vec![],
                discounts: vec![Discount {
                    name: "Summer Special".to_string(),
                    kind: DiscountKind::Percentage,
                    value: Decimal::TEN,
                    start_date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
                    end_date: NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date"),
                }],
            },
        )
        .await?;
    tracing::info!(product_id = %cold_brew.id, "Seeded product");

    tracing::info!("Seeding complete!");
    Ok(())
}
