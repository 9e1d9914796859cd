//! Shop data repository for database operations.
//!
//! Every read joins the owning user so that shop responses can carry the owner's name.

use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::{page_index, Page},
    shop::{CreateShopParams, Shop, ShopFilter, UpdateShopParams},
};

/// Repository providing database operations for shops.
pub struct ShopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new shop.
    ///
    /// # Arguments
    /// - `params` - Validated shop fields including the owner ID
    ///
    /// # Returns
    /// - `Ok(Shop)` - The created shop with its owner's name
    /// - `Err(DbErr)` - Database error during insert, including an unknown owner
    pub async fn create(&self, params: CreateShopParams) -> Result<Shop, DbErr> {
        let now = Utc::now();

        let entity = entity::shop::ActiveModel {
            name: ActiveValue::Set(params.name),
            contact: ActiveValue::Set(params.contact),
            shop_type: ActiveValue::Set(params.shop_type),
            address: ActiveValue::Set(params.address),
            owner_id: ActiveValue::Set(params.owner_id),
            opening_time: ActiveValue::Set(params.opening_time),
            closing_time: ActiveValue::Set(params.closing_time),
            slot_duration: ActiveValue::Set(params.slot_duration),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let owner = entity
            .find_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(Shop::from_entity(entity, owner))
    }

    /// Finds a shop by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Shop))` - Shop found
    /// - `Ok(None)` - No shop with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, shop_id: i32) -> Result<Option<Shop>, DbErr> {
        let result = entity::prelude::Shop::find_by_id(shop_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(shop, owner)| Shop::from_entity(shop, owner)))
    }

    /// Gets shops matching the filter with pagination, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional shop type and owner restrictions
    /// - `page` - One-indexed page number
    /// - `per_page` - Number of shops per page
    ///
    /// # Returns
    /// - `Ok(Page<Shop>)` - Shops for the requested page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: ShopFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Shop>, DbErr> {
        let mut condition = Condition::all();
        if let Some(shop_type) = filter.shop_type {
            condition = condition.add(entity::shop::Column::ShopType.eq(shop_type));
        }
        if let Some(owner_id) = filter.owner_id {
            condition = condition.add(entity::shop::Column::OwnerId.eq(owner_id));
        }

        let paginator = entity::prelude::Shop::find()
            .filter(condition)
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::shop::Column::CreatedAt)
            .order_by_desc(entity::shop::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok(Page {
            items: rows
                .into_iter()
                .map(|(shop, owner)| Shop::from_entity(shop, owner))
                .collect(),
            page,
            limit: per_page,
            total,
        })
    }

    /// Finds shops whose name or type contains the query, ignoring ASCII case.
    ///
    /// `%` and `_` in the query are matched literally.
    pub async fn search(&self, query: &str) -> Result<Vec<Shop>, DbErr> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = entity::prelude::Shop::find()
            .filter(
                Condition::any()
                    .add(
                        entity::shop::Column::Name
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                    .add(entity::shop::Column::ShopType.like(LikeExpr::new(pattern).escape('\\'))),
            )
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::shop::Column::Name)
            .order_by_asc(entity::shop::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(shop, owner)| Shop::from_entity(shop, owner))
            .collect())
    }

    /// Gets all shops owned by a user, newest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Shop>, DbErr> {
        let rows = entity::prelude::Shop::find()
            .filter(entity::shop::Column::OwnerId.eq(owner_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::shop::Column::CreatedAt)
            .order_by_desc(entity::shop::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(shop, owner)| Shop::from_entity(shop, owner))
            .collect())
    }

    /// Applies a partial update to a shop.
    ///
    /// # Returns
    /// - `Ok(Some(Shop))` - Updated shop
    /// - `Ok(None)` - No shop with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        shop_id: i32,
        params: UpdateShopParams,
    ) -> Result<Option<Shop>, DbErr> {
        let Some(existing) = entity::prelude::Shop::find_by_id(shop_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(contact) = params.contact {
            active.contact = ActiveValue::Set(contact);
        }
        if let Some(shop_type) = params.shop_type {
            active.shop_type = ActiveValue::Set(shop_type);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(opening_time) = params.opening_time {
            active.opening_time = ActiveValue::Set(opening_time);
        }
        if let Some(closing_time) = params.closing_time {
            active.closing_time = ActiveValue::Set(closing_time);
        }
        if let Some(slot_duration) = params.slot_duration {
            active.slot_duration = ActiveValue::Set(slot_duration);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_id(shop_id).await
    }

    /// Deletes a shop; its appointments are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Shop deleted
    /// - `Ok(false)` - No shop with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, shop_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Shop::delete_by_id(shop_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
