//! Status transition rules.
//!
//! The intended lifecycle is `pending -> confirmed -> completed`, with `pending` and
//! `confirmed` both able to move to `cancelled`. Which statuses currently lock an
//! appointment is decided by [`blocks_status_change`] alone.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AppointmentStatus;

use crate::server::{error::appointment::AppointmentError, model::appointment::Appointment};

/// Whether an appointment in `status` refuses any further status change.
///
/// Currently every status locks, including `pending`. Narrowing this to
/// `Cancelled | Completed` enables the lifecycle described above.
pub fn blocks_status_change(status: AppointmentStatus) -> bool {
    match status {
        AppointmentStatus::Pending
        | AppointmentStatus::Confirmed
        | AppointmentStatus::Cancelled
        | AppointmentStatus::Completed => true,
    }
}

/// Checks whether `appointment` may change status at `now`.
///
/// An appointment whose start has passed is rejected before its status is considered.
/// An appointment starting exactly at `now` is not yet past.
///
/// # Returns
/// - `Ok(())` - Status may change
/// - `Err(AppointmentError::InvalidTimeSlot)` - Stored slot has no parseable start
/// - `Err(AppointmentError::PastAppointment)` - `now` is after the scheduled start
/// - `Err(AppointmentError::AlreadyFinal)` - Current status locks the appointment
pub fn check_transition(
    appointment: &Appointment,
    now: NaiveDateTime,
) -> Result<(), AppointmentError> {
    let starts_at = appointment.starts_at()?;

    if now > starts_at {
        return Err(AppointmentError::PastAppointment);
    }

    if blocks_status_change(appointment.status) {
        return Err(AppointmentError::AlreadyFinal(appointment.status));
    }

    Ok(())
}
