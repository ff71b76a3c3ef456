//! Database bootstrap entrypoint.
//!
//! Loads configuration from the environment, connects to the database and
//! exits once the connection is established.

use mongo_init::config::{load_dotenv, AppConfig};
use mongo_init::db::init_database;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "mongo-init";

#[tokio::main]
async fn main() {
    // Load .env file (if present) before anything else
    load_dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!(service = SERVICE_NAME, "starting database bootstrap");

    let config = AppConfig::from_env()
        .expect("Failed to load configuration (check DATABASE_URL)");

    let _client = init_database(&config)
        .await
        .expect("Failed to connect to database");
}
