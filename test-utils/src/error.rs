use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema setup failure.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
