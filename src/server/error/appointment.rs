use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::AppointmentStatus;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by the slot conflict guard and the status transition rules.
#[derive(Error, Debug, PartialEq)]
pub enum AppointmentError {
    /// A confirmed appointment already holds this shop, date and time slot.
    #[error("This time slot is already booked. Please choose another.")]
    SlotAlreadyBooked,

    /// No appointment exists with the given ID.
    #[error("Appointment not found")]
    NotFound(i32),

    /// The scheduled start of the appointment has passed.
    #[error("Cannot update status of a past appointment")]
    PastAppointment,

    /// The appointment's current status does not allow further changes.
    #[error("Appointment is already {}, status cannot be changed", .0.to_value())]
    AlreadyFinal(AppointmentStatus),

    /// Status value outside pending, confirmed, cancelled or completed.
    #[error("Invalid status value")]
    InvalidStatus(String),

    /// Time slot not in "HH:MM-HH:MM" form or with an end before its start.
    #[error("Invalid time slot '{0}', expected HH:MM-HH:MM")]
    InvalidTimeSlot(String),

    /// Date neither "YYYY-MM-DD" nor an RFC 3339 timestamp.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Converts booking rule violations into HTTP responses.
///
/// - `SlotAlreadyBooked` → 409 Conflict
/// - `NotFound` → 404 Not Found
/// - everything else → 400 Bad Request
impl IntoResponse for AppointmentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::SlotAlreadyBooked => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PastAppointment
            | Self::AlreadyFinal(_)
            | Self::InvalidStatus(_)
            | Self::InvalidTimeSlot(_)
            | Self::InvalidDate(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
