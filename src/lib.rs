//! MongoDB startup connector.
//!
//! Reads the database connection string from the `DATABASE_URL` environment
//! variable, opens an asynchronous connection to the database and emits one
//! informational log line once the connection is established. Retries,
//! pooling and recovery are left entirely to the driver.

pub mod config;
pub mod db;
pub mod errors;

// Re-export commonly used types
pub use config::{load_dotenv, AppConfig};
pub use db::init_database;
pub use errors::{AppError, AppResult};
