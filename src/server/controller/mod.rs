//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, hand DTOs to the service
//! layer, and convert the returned domain models back into DTOs.

pub mod appointment;
pub mod index;
pub mod param;
pub mod shop;
pub mod user;
