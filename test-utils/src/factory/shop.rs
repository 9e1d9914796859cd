//! Shop factory for creating test shop entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ShopType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shops owned by an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let shop = ShopFactory::new(&db, owner.id)
///     .name("Corner Salon")
///     .shop_type(ShopType::Salon)
///     .build()
///     .await?;
/// ```
pub struct ShopFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    shop_type: ShopType,
    opening_time: String,
    closing_time: String,
    slot_duration: i32,
}

impl<'a> ShopFactory<'a> {
    /// Creates a new ShopFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Shop {id}"`
    /// - shop_type: `ShopType::Clinic`
    /// - hours: 09:00 to 17:00 with 30 minute slots
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Shop {}", id),
            shop_type: ShopType::Clinic,
            opening_time: "09:00".to_string(),
            closing_time: "17:00".to_string(),
            slot_duration: 30,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn shop_type(mut self, shop_type: ShopType) -> Self {
        self.shop_type = shop_type;
        self
    }

    pub fn hours(mut self, opening_time: &str, closing_time: &str) -> Self {
        self.opening_time = opening_time.to_string();
        self.closing_time = closing_time.to_string();
        self
    }

    /// Builds and inserts the shop entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shop::Model)` - Created shop entity
    /// - `Err(DbErr)` - Database error during insert, including a missing owner
    pub async fn build(self) -> Result<entity::shop::Model, DbErr> {
        let now = Utc::now();
        entity::shop::ActiveModel {
            name: ActiveValue::Set(self.name),
            contact: ActiveValue::Set("5551234567".to_string()),
            shop_type: ActiveValue::Set(self.shop_type),
            address: ActiveValue::Set("1 Test Street".to_string()),
            owner_id: ActiveValue::Set(self.owner_id),
            opening_time: ActiveValue::Set(self.opening_time),
            closing_time: ActiveValue::Set(self.closing_time),
            slot_duration: ActiveValue::Set(self.slot_duration),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop with default values for the given owner.
pub async fn create_shop(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::shop::Model, DbErr> {
    ShopFactory::new(db, owner_id).build().await
}
