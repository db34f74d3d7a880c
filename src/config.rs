use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be a positive number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub api_prefix: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let max_connections = var("DB_MAX_CONNECTIONS", "5");
        let db_max_connections = match max_connections.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(ConfigError::InvalidNumber {
                    key: "DB_MAX_CONNECTIONS",
                    value: max_connections,
                });
            }
        };

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:5000"),
            database_url: var("DATABASE_URL", "sqlite://hrms.db"),
            db_max_connections,
            api_prefix: var("API_PREFIX", "/api"),
            log_dir: var("LOG_DIR", "logs"),
        })
    }
}
