//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .mobile("9876543210")
///     .role(UserRole::Shopkeeper)
///     .otp("123456", Utc::now() + Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    mobile: String,
    name: Option<String>,
    role: UserRole,
    otp: Option<String>,
    otp_expires_at: Option<DateTime<Utc>>,
    is_verified: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - mobile: ten digits derived from an auto-incremented id
    /// - name: `Some("User {id}")`
    /// - role: `UserRole::User`
    /// - no pending OTP, not verified
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            mobile: format!("9{:09}", id),
            name: Some(format!("User {}", id)),
            role: UserRole::User,
            otp: None,
            otp_expires_at: None,
            is_verified: false,
        }
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    pub fn name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets a pending OTP and its expiry.
    pub fn otp(mut self, otp: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        self.otp = Some(otp.into());
        self.otp_expires_at = Some(expires_at);
        self
    }

    pub fn verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            mobile: ActiveValue::Set(self.mobile),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            otp: ActiveValue::Set(self.otp),
            otp_expires_at: ActiveValue::Set(self.otp_expires_at),
            is_verified: ActiveValue::Set(self.is_verified),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with the `user` role and default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the `shopkeeper` role.
pub async fn create_shopkeeper(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Shopkeeper).build().await
}

/// Creates a user with the `admin` role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert_eq!(user.mobile.len(), 10);
        assert_eq!(user.role, UserRole::User);
        assert!(user.otp.is_none());
        assert!(!user.is_verified);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_shopkeeper(db).await?;

        assert_ne!(user1.mobile, user2.mobile);
        assert_eq!(user2.role, UserRole::Shopkeeper);

        Ok(())
    }
}
