//! Application error types.

use thiserror::Error;

/// Convenience result alias used across the crate.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error (missing environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection error (driver-reported).
    #[error("Database connection failed: {0}")]
    DatabaseConnection(String),
}
