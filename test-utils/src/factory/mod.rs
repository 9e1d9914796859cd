//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they depend on, and
//! the helpers module creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::user::create_shopkeeper(&db).await?;
//!     let shop = factory::shop::create_shop(&db, owner.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, shop, appointment) =
//!         factory::helpers::create_appointment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let appointment = factory::appointment::AppointmentFactory::new(&db, user.id, shop.id)
//!     .date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
//!     .time_slot("09:00-09:30")
//!     .status(AppointmentStatus::Confirmed)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shop` - Create shop entities
//! - `appointment` - Create appointment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod appointment;
pub mod helpers;
pub mod shop;
pub mod user;

pub use appointment::create_appointment;
pub use shop::create_shop;
pub use user::{create_admin, create_shopkeeper, create_user};
