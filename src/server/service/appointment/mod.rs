//! Appointment service: booking, listing and status transitions.
//!
//! Booking runs the slot conflict guard and the insert inside one transaction. Status
//! updates pass through the transition rules in [`transition`], and a move to
//! `confirmed` re-applies the slot guard against other appointments in the same slot.

pub mod slot_guard;
pub mod transition;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AppointmentStatus;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::appointment::CreateAppointmentDto,
    server::{
        data::{appointment::AppointmentRepository, shop::ShopRepository},
        error::{appointment::AppointmentError, auth::AuthError, AppError},
        model::{
            appointment::{Appointment, AppointmentWithUser, CreateAppointmentParam},
            page::Page,
            user::User,
        },
        util::{
            clock::Clock,
            parse::parse_appointment_status,
        },
    },
};

use self::{
    slot_guard::{check_and_reserve, ensure_slot_free, slot_conflict},
    transition::check_transition,
};

/// Check run on the current row before a status change is written.
type TransitionRules = fn(&Appointment, NaiveDateTime) -> Result<(), AppointmentError>;

/// Service providing booking operations.
pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> AppointmentService<'a> {
    /// Creates a new AppointmentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `clock` - Source of the current local time for the past-appointment rule
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Books a slot for `user`.
    ///
    /// New appointments always start as `pending`; a status in the request is ignored.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The new pending appointment
    /// - `Err(AppError::BadRequest)` / `Err(AppointmentError::InvalidDate | InvalidTimeSlot)` -
    ///   Malformed request
    /// - `Err(AppError::NotFound)` - Shop does not exist
    /// - `Err(AppointmentError::SlotAlreadyBooked)` - A confirmed appointment holds the slot
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        user: &User,
        dto: CreateAppointmentDto,
    ) -> Result<Appointment, AppError> {
        if let Some(status) = dto.status.as_deref().filter(|status| *status != "pending") {
            tracing::debug!(
                "Ignoring requested status '{}' for new appointment by user {}",
                status,
                user.id
            );
        }

        let param = CreateAppointmentParam::from_dto(user.id, dto)?;

        if ShopRepository::new(self.db)
            .find_by_id(param.shop_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Shop not found".to_string()));
        }

        let txn = self.db.begin().await?;
        let repo = AppointmentRepository::new(&txn);

        check_and_reserve(&repo, param.shop_id, param.date, &param.time_slot).await?;
        let appointment = repo.create(param).await.map_err(slot_conflict)?;

        txn.commit().await.map_err(slot_conflict)?;

        tracing::info!(
            "User {} booked appointment {} at shop {}",
            user.id,
            appointment.id,
            appointment.shop_id
        );

        Ok(appointment)
    }

    /// Lists a shop's appointments with their booking users, sorted by date and slot.
    ///
    /// # Arguments
    /// - `shop_id` - Shop whose appointments to list
    /// - `status` - Optional raw status filter
    /// - `page` - One-indexed page number
    /// - `per_page` - Appointments per page
    pub async fn list_by_shop(
        &self,
        shop_id: i32,
        status: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<AppointmentWithUser>, AppError> {
        let status = status.map(parse_appointment_status).transpose()?;

        Ok(AppointmentRepository::new(self.db)
            .get_paginated_by_shop(shop_id, status, page, per_page)
            .await?)
    }

    /// Changes the status of an appointment on behalf of `actor`.
    ///
    /// Checks run in this order: the requested value is a known status, the appointment
    /// exists, `actor` is its booking user, the shop's owner or an admin, then the
    /// transition rules of [`check_transition`].
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Updated appointment
    /// - `Err(AppointmentError::InvalidStatus)` - Unknown status value
    /// - `Err(AppointmentError::NotFound)` - No appointment with that ID
    /// - `Err(AuthError::AccessDenied)` - Actor may not change this appointment
    /// - `Err(AppointmentError::PastAppointment | AlreadyFinal | InvalidTimeSlot)` -
    ///   Transition rejected
    /// - `Err(AppointmentError::SlotAlreadyBooked)` - Confirming would double-book the slot
    pub async fn transition(
        &self,
        actor: &User,
        appointment_id: i32,
        requested: &str,
    ) -> Result<Appointment, AppError> {
        let requested = parse_appointment_status(requested.trim())?;

        let appointment = AppointmentRepository::new(self.db)
            .find_by_id(appointment_id)
            .await?
            .ok_or(AppointmentError::NotFound(appointment_id))?;

        self.authorize(actor, &appointment).await?;

        self.apply_status(appointment.id, requested, check_transition)
            .await
    }

    /// Persists a status change inside one transaction.
    ///
    /// The appointment is re-read on the transaction and `rules` are checked against
    /// that row, so the change is decided on the state it is written over.
    async fn apply_status(
        &self,
        appointment_id: i32,
        status: AppointmentStatus,
        rules: TransitionRules,
    ) -> Result<Appointment, AppError> {
        let txn = self.db.begin().await?;
        let repo = AppointmentRepository::new(&txn);

        let appointment = repo
            .find_by_id(appointment_id)
            .await?
            .ok_or(AppointmentError::NotFound(appointment_id))?;

        rules(&appointment, self.clock.now())?;

        if status == AppointmentStatus::Confirmed {
            ensure_slot_free(
                &repo,
                appointment.shop_id,
                appointment.date,
                &appointment.time_slot,
                Some(appointment.id),
            )
            .await?;
        }

        let updated = repo
            .update_status(appointment.id, status)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => AppointmentError::NotFound(appointment.id).into(),
                err => slot_conflict(err),
            })?;

        txn.commit().await.map_err(slot_conflict)?;

        tracing::info!(
            "Appointment {} moved from {:?} to {:?}",
            updated.id,
            appointment.status,
            updated.status
        );

        Ok(updated)
    }

    async fn authorize(&self, actor: &User, appointment: &Appointment) -> Result<(), AppError> {
        if actor.is_admin() || actor.id == appointment.user_id {
            return Ok(());
        }

        let owns_shop = ShopRepository::new(self.db)
            .find_by_id(appointment.shop_id)
            .await?
            .is_some_and(|shop| shop.owner_id == actor.id);

        if !owns_shop {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!(
                    "User may not change the status of appointment {}",
                    appointment.id
                ),
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod test;
