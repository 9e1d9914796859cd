use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::AppointmentStatus;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::appointment::CreateAppointmentDto,
    server::{
        error::{appointment::AppointmentError, auth::AuthError, AppError},
        model::{appointment::Appointment, user::User},
        service::appointment::AppointmentService,
        util::clock::FixedClock,
    },
};

mod create;
mod list_by_shop;

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn june_first_at(hour: u32, minute: u32) -> NaiveDateTime {
    june_first().and_hms_opt(hour, minute, 0).unwrap()
}

/// Clock set well before any appointment the tests create.
fn early_clock() -> FixedClock {
    FixedClock(june_first_at(0, 0))
}

/// Rules that accept every change, for exercising the persistence step on its own.
fn allow_any(_: &Appointment, _: NaiveDateTime) -> Result<(), AppointmentError> {
    Ok(())
}

/// Rules that lock only cancelled and completed appointments.
fn terminal_only(appointment: &Appointment, _: NaiveDateTime) -> Result<(), AppointmentError> {
    match appointment.status {
        AppointmentStatus::Cancelled | AppointmentStatus::Completed => {
            Err(AppointmentError::AlreadyFinal(appointment.status))
        }
        AppointmentStatus::Pending | AppointmentStatus::Confirmed => Ok(()),
    }
}

fn booking(shop_id: i32, date: &str, time_slot: &str) -> CreateAppointmentDto {
    CreateAppointmentDto {
        shop_id: Some(shop_id),
        date: date.to_string(),
        time_slot: time_slot.to_string(),
        status: None,
    }
}

/// Creates a shop plus a booking user, returning the booking user and the shop ID.
async fn setup_shop(db: &DatabaseConnection) -> Result<(User, i32), sea_orm::DbErr> {
    let (_, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    Ok((User::from_entity(user), shop.id))
}
