//! SeaORM entities for the booking schema.

pub mod prelude;

pub mod appointment;
pub mod sea_orm_active_enums;
pub mod shop;
pub mod user;
