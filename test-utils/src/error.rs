use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create the schema.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// A lazily created resource was requested before it could be set up.
    #[error("Test context {0} is not initialized")]
    NotInitialized(&'static str),
}
