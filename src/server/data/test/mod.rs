use chrono::NaiveDate;
use entity::sea_orm_active_enums::{AppointmentStatus, ShopType, UserRole};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{appointment::AppointmentRepository, shop::ShopRepository, user::UserRepository},
    model::{
        appointment::CreateAppointmentParam,
        shop::{CreateShopParams, ShopFilter, UpdateShopParams},
        user::CreateUserParam,
    },
};

mod appointment;
mod shop;

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}
