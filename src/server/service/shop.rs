//! Shop service for business logic.
//!
//! Access control (shopkeeper role, shop ownership) is enforced by `AuthGuard` in the
//! controllers; this service validates input and maps missing shops to 404.

use sea_orm::DatabaseConnection;

use crate::{
    model::shop::{CreateShopDto, UpdateShopDto},
    server::{
        data::shop::ShopRepository,
        error::AppError,
        model::{
            page::Page,
            shop::{CreateShopParams, Shop, ShopFilter, UpdateShopParams},
            user::User,
        },
    },
};

pub struct ShopService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a shop owned by `owner`.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The created shop
    /// - `Err(AppError::BadRequest)` - Validation failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, owner: &User, dto: CreateShopDto) -> Result<Shop, AppError> {
        let params = CreateShopParams::from_dto(owner.id, dto)?;
        let shop = ShopRepository::new(self.db).create(params).await?;

        tracing::info!("User {} created shop {}", owner.id, shop.id);

        Ok(shop)
    }

    pub async fn get_by_id(&self, shop_id: i32) -> Result<Shop, AppError> {
        ShopRepository::new(self.db)
            .find_by_id(shop_id)
            .await?
            .ok_or_else(shop_not_found)
    }

    pub async fn get_paginated(
        &self,
        filter: ShopFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Shop>, AppError> {
        Ok(ShopRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?)
    }

    /// Searches shops by name or type.
    ///
    /// # Returns
    /// - `Ok(Vec<Shop>)` - Matching shops, possibly empty
    /// - `Err(AppError::BadRequest)` - Blank query
    pub async fn search(&self, query: &str) -> Result<Vec<Shop>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        Ok(ShopRepository::new(self.db).search(query).await?)
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Shop>, AppError> {
        Ok(ShopRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    /// Applies a partial update, validating provided fields against the current shop.
    ///
    /// # Returns
    /// - `Ok(Shop)` - Updated shop
    /// - `Err(AppError::NotFound)` - No shop with that ID
    /// - `Err(AppError::BadRequest)` - Validation failed
    pub async fn update(&self, shop_id: i32, dto: UpdateShopDto) -> Result<Shop, AppError> {
        let repo = ShopRepository::new(self.db);

        let current = repo.find_by_id(shop_id).await?.ok_or_else(shop_not_found)?;
        let params = UpdateShopParams::from_dto(dto, &current)?;

        repo.update(shop_id, params)
            .await?
            .ok_or_else(shop_not_found)
    }

    /// Deletes a shop together with its appointments.
    pub async fn delete(&self, shop_id: i32) -> Result<(), AppError> {
        if !ShopRepository::new(self.db).delete(shop_id).await? {
            return Err(shop_not_found());
        }

        tracing::info!("Deleted shop {}", shop_id);

        Ok(())
    }
}

fn shop_not_found() -> AppError {
    AppError::NotFound("Shop not found".to_string())
}
