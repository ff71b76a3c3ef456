//! Environment-based application configuration.
//!
//! The connection string is read once at process startup from the
//! `DATABASE_URL` environment variable. Its content is never inspected here;
//! a malformed value is rejected by the driver.

use crate::errors::{AppError, AppResult};

/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string (host, port and database name).
    pub database_url: String,
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        let database_url = std::env::var(DATABASE_URL_ENV)
            .map_err(|_| AppError::Config(format!("{} must be set", DATABASE_URL_ENV)))?;
        Ok(Self { database_url })
    }
}

/// Load .env file from the working directory (best-effort, no error if missing).
pub fn load_dotenv() {
    let env_path = std::path::Path::new(".env");
    if env_path.exists() {
        if let Ok(content) = std::fs::read_to_string(env_path) {
            apply_env_lines(&content);
        }
    }
}

fn apply_env_lines(content: &str) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Only set if not already set by the environment
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_reads_database_url() {
        std::env::set_var(DATABASE_URL_ENV, "mongodb://localhost:27017/blog");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "mongodb://localhost:27017/blog");

        std::env::remove_var(DATABASE_URL_ENV);
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(DATABASE_URL_ENV));
    }

    #[test]
    fn test_apply_env_lines_skips_comments_and_blanks() {
        let content = "# comment\n\nTEST_DOTENV_KEY_A = value-a\n";
        apply_env_lines(content);
        assert_eq!(std::env::var("TEST_DOTENV_KEY_A").unwrap(), "value-a");
        std::env::remove_var("TEST_DOTENV_KEY_A");
    }

    #[test]
    fn test_apply_env_lines_does_not_override_environment() {
        std::env::set_var("TEST_DOTENV_KEY_B", "from-env");
        apply_env_lines("TEST_DOTENV_KEY_B=from-file\n");
        assert_eq!(std::env::var("TEST_DOTENV_KEY_B").unwrap(), "from-env");
        std::env::remove_var("TEST_DOTENV_KEY_B");
    }
}
