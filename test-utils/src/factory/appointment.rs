//! Appointment factory for creating test appointment entities.
//!
//! Inserts rows directly, bypassing the slot guard, so tests can set up any status
//! including several appointments in the same slot.

use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::AppointmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(&db, user.id, shop.id)
///     .time_slot("10:00-10:30")
///     .status(AppointmentStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shop_id: i32,
    date: NaiveDate,
    time_slot: String,
    status: AppointmentStatus,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - date: tomorrow (UTC)
    /// - time_slot: `"09:00-09:30"`
    /// - status: `AppointmentStatus::Pending`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, shop_id: i32) -> Self {
        Self {
            db,
            user_id,
            shop_id,
            date: (Utc::now() + Duration::days(1)).date_naive(),
            time_slot: "09:00-09:30".to_string(),
            status: AppointmentStatus::Pending,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time_slot(mut self, time_slot: impl Into<String>) -> Self {
        self.time_slot = time_slot.into();
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert, including a second confirmed
    ///   appointment for the same slot when the partial unique index exists
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            shop_id: ActiveValue::Set(self.shop_id),
            date: ActiveValue::Set(self.date),
            time_slot: ActiveValue::Set(self.time_slot),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appointment for tomorrow with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    user_id: i32,
    shop_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, user_id, shop_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{shop::create_shop, user::create_shopkeeper, user::create_user},
    };

    #[tokio::test]
    async fn rejects_second_confirmed_appointment_for_same_slot() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = create_shopkeeper(db).await?;
        let shop = create_shop(db, owner.id).await?;
        let first = create_user(db).await?;
        let second = create_user(db).await?;

        AppointmentFactory::new(db, first.id, shop.id)
            .status(AppointmentStatus::Confirmed)
            .build()
            .await?;

        let result = AppointmentFactory::new(db, second.id, shop.id)
            .status(AppointmentStatus::Confirmed)
            .build()
            .await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn allows_many_pending_appointments_for_same_slot() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = create_shopkeeper(db).await?;
        let shop = create_shop(db, owner.id).await?;
        let user = create_user(db).await?;

        create_appointment(db, user.id, shop.id).await?;
        create_appointment(db, user.id, shop.id).await?;
        AppointmentFactory::new(db, user.id, shop.id)
            .status(AppointmentStatus::Confirmed)
            .build()
            .await?;

        Ok(())
    }
}
