//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Admin code service for bootstrapping the first admin
//! - Clock used by the appointment transition rules

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{service::admin_code::AdminCodeService, util::clock::Clock};

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the connection pool, the admin code storage and the clock are all
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for executing queries.
    pub db: DatabaseConnection,
    /// Service for the one-time bootstrap admin code.
    pub admin_code_service: AdminCodeService,
    /// Source of the current local time.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            clock,
        }
    }
}
