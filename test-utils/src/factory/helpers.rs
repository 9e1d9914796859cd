//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a shopkeeper and a shop they own.
///
/// # Returns
/// - `Ok((owner, shop))` - The shopkeeper and their shop
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shop_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::shop::Model), DbErr> {
    let owner = crate::factory::user::create_shopkeeper(db).await?;
    let shop = crate::factory::shop::create_shop(db, owner.id).await?;

    Ok((owner, shop))
}

/// Creates a complete booking with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Shopkeeper and their shop
/// 2. Booking user
/// 3. Pending appointment for tomorrow
///
/// # Returns
/// - `Ok((user, shop, appointment))` - The booking user, the shop and the appointment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::shop::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let (_, shop) = create_shop_with_owner(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let appointment = crate::factory::appointment::create_appointment(db, user.id, shop.id).await?;

    Ok((user, shop, appointment))
}
