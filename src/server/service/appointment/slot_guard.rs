//! Slot conflict guard.
//!
//! A shop's slot on a given date may hold any number of pending, cancelled or completed
//! appointments but at most one confirmed appointment. The guard looks for that confirmed
//! appointment before a write; the partial unique index on
//! `(shop_id, date, time_slot) WHERE status = 'confirmed'` catches writes that race past it.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::server::{
    data::appointment::AppointmentRepository,
    error::{appointment::AppointmentError, AppError},
};

/// Fails with `SlotAlreadyBooked` when a confirmed appointment holds the slot.
///
/// Run this and the following insert on the same transaction.
///
/// # Returns
/// - `Ok(())` - Slot is free
/// - `Err(AppointmentError::SlotAlreadyBooked)` - A confirmed appointment exists
/// - `Err(AppError::DbErr)` - Database error during lookup
pub async fn check_and_reserve<C: ConnectionTrait>(
    repo: &AppointmentRepository<'_, C>,
    shop_id: i32,
    date: NaiveDate,
    time_slot: &str,
) -> Result<(), AppError> {
    ensure_slot_free(repo, shop_id, date, time_slot, None).await
}

/// Same check as [`check_and_reserve`], ignoring the appointment `excluding`.
///
/// Used when an existing appointment is about to become confirmed.
pub async fn ensure_slot_free<C: ConnectionTrait>(
    repo: &AppointmentRepository<'_, C>,
    shop_id: i32,
    date: NaiveDate,
    time_slot: &str,
    excluding: Option<i32>,
) -> Result<(), AppError> {
    let holder = repo
        .find_confirmed_in_slot(shop_id, date, time_slot, excluding)
        .await?;

    if let Some(holder) = holder {
        tracing::debug!(
            "Slot {} on {} at shop {} already held by appointment {}",
            time_slot,
            date,
            shop_id,
            holder.id
        );
        return Err(AppointmentError::SlotAlreadyBooked.into());
    }

    Ok(())
}

/// Maps a unique index violation on write to `SlotAlreadyBooked`.
///
/// Any other database error is passed through unchanged.
pub fn slot_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppointmentError::SlotAlreadyBooked.into(),
        _ => err.into(),
    }
}
