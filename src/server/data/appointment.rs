//! Appointment data repository for database operations.
//!
//! `AppointmentRepository` is generic over the connection so the slot guard can run its
//! lookup and insert inside a single transaction.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::AppointmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    appointment::{Appointment, AppointmentWithUser, CreateAppointmentParam},
    page::{page_index, Page},
};

/// Repository providing database operations for appointments.
///
/// Accepts either a `DatabaseConnection` or a `DatabaseTransaction`.
pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new appointment in the `pending` status.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAppointmentParam) -> Result<Appointment, DbErr> {
        let now = Utc::now();

        let entity = entity::appointment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            shop_id: ActiveValue::Set(param.shop_id),
            date: ActiveValue::Set(param.date),
            time_slot: ActiveValue::Set(param.time_slot),
            status: ActiveValue::Set(AppointmentStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    pub async fn find_by_id(&self, appointment_id: i32) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(appointment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Finds the confirmed appointment holding a shop's slot on a date, if any.
    ///
    /// # Arguments
    /// - `shop_id` - Shop the slot belongs to
    /// - `date` - Booking date
    /// - `time_slot` - Exact "HH:MM-HH:MM" slot string
    /// - `excluding` - Appointment to ignore, used when confirming an existing booking
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The slot is taken
    /// - `Ok(None)` - No confirmed appointment holds the slot
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_confirmed_in_slot(
        &self,
        shop_id: i32,
        date: NaiveDate,
        time_slot: &str,
        excluding: Option<i32>,
    ) -> Result<Option<Appointment>, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ShopId.eq(shop_id))
            .filter(entity::appointment::Column::Date.eq(date))
            .filter(entity::appointment::Column::TimeSlot.eq(time_slot))
            .filter(entity::appointment::Column::Status.eq(AppointmentStatus::Confirmed));

        if let Some(appointment_id) = excluding {
            query = query.filter(entity::appointment::Column::Id.ne(appointment_id));
        }

        let entity = query.one(self.db).await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Sets the status of an appointment.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The updated appointment
    /// - `Err(DbErr::RecordNotUpdated)` - No appointment with that ID
    /// - `Err(DbErr)` - Other database error, including a unique index violation
    pub async fn update_status(
        &self,
        appointment_id: i32,
        status: AppointmentStatus,
    ) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            id: ActiveValue::Unchanged(appointment_id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    /// Gets a shop's appointments with the booking user's details, paginated.
    ///
    /// Sorted by date then time slot, earliest first.
    ///
    /// # Arguments
    /// - `shop_id` - Shop whose appointments to list
    /// - `status` - Optional status restriction
    /// - `page` - One-indexed page number
    /// - `per_page` - Number of appointments per page
    pub async fn get_paginated_by_shop(
        &self,
        shop_id: i32,
        status: Option<AppointmentStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<AppointmentWithUser>, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ShopId.eq(shop_id));

        if let Some(status) = status {
            query = query.filter(entity::appointment::Column::Status.eq(status));
        }

        let paginator = query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::TimeSlot)
            .order_by_asc(entity::appointment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok(Page {
            items: rows
                .into_iter()
                .map(|(appointment, user)| AppointmentWithUser::from_entity(appointment, user))
                .collect(),
            page,
            limit: per_page,
            total,
        })
    }
}
