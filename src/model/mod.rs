//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types define the JSON shape of every endpoint. They carry no business logic;
//! the server converts them to and from its domain models at the controller boundary.

pub mod api;
pub mod appointment;
pub mod pagination;
pub mod shop;
pub mod user;
