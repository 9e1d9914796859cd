//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, OTP bookkeeping and paginated listing with conversion between
//! entity models and domain models at the infrastructure boundary.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::{page_index, Page},
    user::{CreateUserParam, User, UserCredentials},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new unverified user.
    ///
    /// # Arguments
    /// - `param` - Mobile number, optional name and role of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate mobile number
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            mobile: ActiveValue::Set(param.mobile),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role),
            otp: ActiveValue::Set(None),
            otp_expires_at: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Mobile.eq(mobile))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by mobile number together with their pending OTP.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found, OTP fields may be empty
    /// - `Ok(None)` - Mobile number not registered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_mobile(
        &self,
        mobile: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Mobile.eq(mobile))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Stores a new OTP for the user, replacing any previous one.
    ///
    /// # Returns
    /// - `Ok(())` - OTP stored (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_otp(
        &self,
        user_id: i32,
        otp: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .set(entity::user::ActiveModel {
                otp: ActiveValue::Set(Some(otp)),
                otp_expires_at: ActiveValue::Set(Some(expires_at)),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks the user verified and clears their OTP so it cannot be reused.
    pub async fn mark_verified(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .set(entity::user::ActiveModel {
                is_verified: ActiveValue::Set(true),
                otp: ActiveValue::Set(None),
                otp_expires_at: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether a bootstrap admin code should be generated.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - One-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the requested page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(&self, page: u64, per_page: u64) -> Result<Page<User>, DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok(Page {
            items: entities.into_iter().map(User::from_entity).collect(),
            page,
            limit: per_page,
            total,
        })
    }
}
