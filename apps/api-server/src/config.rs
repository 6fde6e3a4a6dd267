//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Number of HTTP worker threads; actix picks one per core when unset.
    pub workers: Option<usize>,
    /// Blog post store. `None` selects the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
            database: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            workers: parse_var("HTTP_WORKERS"),
            database: Self::database_from_var("DATABASE_URL"),
        }
    }

    /// Configuration for test runs: an ephemeral local port, with the store
    /// selected by `TEST_DATABASE_URL` (in-memory when unset).
    pub fn from_test_env() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: Some(1),
            database: Self::database_from_var("TEST_DATABASE_URL"),
        }
    }

    fn database_from_var(url_var: &str) -> Option<DatabaseConfig> {
        let url = env::var(url_var).ok().filter(|u| !u.trim().is_empty())?;

        let mut config = DatabaseConfig::new(url);
        if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
            config.max_connections = max;
        }
        if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
            config.min_connections = min;
        }
        Some(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_memory_on_8080() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_test_env_binds_ephemeral_port() {
        let config = AppConfig::from_test_env();
        assert_eq!(config.port, 0);
        assert_eq!(config.workers, Some(1));
    }
}
