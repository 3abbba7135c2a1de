//! Load configuration from process environment (or any key lookup, for tests).

use crate::config::types::{AppConfig, DatabaseConfig, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to honour a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store = get("LEARNING_STORE", "postgres").parse()?;
        let database = DatabaseConfig {
            host: get("POSTGRES_HOST", "localhost"),
            port: parse_var(&lookup, "POSTGRES_PORT", 5432)?,
            user: get("POSTGRES_USER", "postgres"),
            password: get("POSTGRES_PASSWORD", ""),
            name: get("POSTGRES_DB", "learning"),
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
        };
        let defaults = ServerConfig::default();
        let server = ServerConfig {
            address: get("SERVER_ADDRESS", &defaults.address),
            body_limit: parse_var(&lookup, "REQUEST_BODY_LIMIT", defaults.body_limit)?,
        };

        Ok(AppConfig {
            store,
            database,
            server,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
