//! Appointment domain models and parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::AppointmentStatus;

use crate::{
    model::appointment::{
        AppointmentDto, AppointmentStatusDto, AppointmentUserDto, CreateAppointmentDto,
    },
    server::{
        error::{appointment::AppointmentError, AppError},
        util::parse::{parse_booking_date, parse_slot_start, parse_time_slot},
    },
};

/// A booked slot at a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub user_id: i32,
    pub shop_id: i32,
    pub date: NaiveDate,
    /// "HH:MM-HH:MM"
    pub time_slot: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            shop_id: entity.shop_id,
            date: entity.date,
            time_slot: entity.time_slot,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Scheduled start: the booking date at the start time of its slot.
    ///
    /// # Returns
    /// - `Ok(NaiveDateTime)` - Local start of the appointment
    /// - `Err(AppointmentError::InvalidTimeSlot)` - Stored slot has no parseable start
    pub fn starts_at(&self) -> Result<NaiveDateTime, AppointmentError> {
        Ok(self.date.and_time(parse_slot_start(&self.time_slot)?))
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            user_id: self.user_id,
            shop_id: self.shop_id,
            date: self.date,
            time_slot: self.time_slot,
            status: self.status.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: None,
        }
    }
}

impl From<AppointmentStatus> for AppointmentStatusDto {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => Self::Pending,
            AppointmentStatus::Confirmed => Self::Confirmed,
            AppointmentStatus::Cancelled => Self::Cancelled,
            AppointmentStatus::Completed => Self::Completed,
        }
    }
}

/// Appointment listed for a shop, with the booking user's contact details.
#[derive(Debug, Clone)]
pub struct AppointmentWithUser {
    pub appointment: Appointment,
    pub user_name: Option<String>,
    pub user_mobile: Option<String>,
}

impl AppointmentWithUser {
    pub fn from_entity(
        entity: entity::appointment::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        let (user_name, user_mobile) = match user {
            Some(user) => (user.name, Some(user.mobile)),
            None => (None, None),
        };

        Self {
            appointment: Appointment::from_entity(entity),
            user_name,
            user_mobile,
        }
    }

    pub fn into_dto(self) -> AppointmentDto {
        let user = self.user_mobile.map(|mobile| AppointmentUserDto {
            name: self.user_name,
            mobile,
        });

        AppointmentDto {
            user,
            ..self.appointment.into_dto()
        }
    }
}

/// Validated booking request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAppointmentParam {
    pub user_id: i32,
    pub shop_id: i32,
    pub date: NaiveDate,
    pub time_slot: String,
}

impl CreateAppointmentParam {
    /// Validates a booking request made by `user_id`.
    ///
    /// Any status supplied in the request is ignored; see
    /// [`AppointmentService::create`](crate::server::service::appointment::AppointmentService::create).
    pub fn from_dto(user_id: i32, dto: CreateAppointmentDto) -> Result<Self, AppError> {
        let shop_id = dto
            .shop_id
            .ok_or_else(|| AppError::BadRequest("Shop ID is required".to_string()))?;
        let date = parse_booking_date(&dto.date)?;
        let time_slot = dto.time_slot.trim().to_string();
        parse_time_slot(&time_slot)?;

        Ok(Self {
            user_id,
            shop_id,
            date,
            time_slot,
        })
    }
}
