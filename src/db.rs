//! Database connection initialization.
//!
//! Opens a MongoDB client from the configured connection string and logs a
//! single informational line once the server acknowledges the connection.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};

/// Initializes the database connection and returns the client handle.
///
/// The connection string is handed to the driver as-is; parse failures and
/// connection failures surface as [`AppError::DatabaseConnection`] with the
/// driver's own error text. No retry or recovery is attempted here.
pub async fn init_database(config: &AppConfig) -> AppResult<Client> {
    let options = ClientOptions::parse(&config.database_url)
        .await
        .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

    let client = Client::with_options(options)
        .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

    // The driver connects lazily; the ping marks the point the connection is
    // actually established.
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

    log_connected(&config.database_url);
    Ok(client)
}

/// Emits the connection-established log line.
fn log_connected(database_url: &str) {
    info!(url = %database_url, "successfully connected to database");
}
