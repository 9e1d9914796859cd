pub use super::appointment::Entity as Appointment;
pub use super::shop::Entity as Shop;
pub use super::user::Entity as User;
