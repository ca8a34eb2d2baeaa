use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Connection string variables checked in order of preference
const DATABASE_URL_VARS: [&str; 4] = [
    "DATABASE_URL",
    "NEON_DATABASE_URL",
    "NEON_DATABASE_URL_DEV",
    "NEON_DATABASE_URL_PROD",
];

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub retry: RetryConfig,
}

/// Bounds for retrying write requests after transient store failures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts including the first one, at least 1
    pub max_attempts: u32,
    /// Delay before the second attempt, doubled for every attempt after it
    pub initial_backoff: Duration,
}

impl RetryConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = DATABASE_URL_VARS
            .iter()
            .find_map(|var| lookup(var).filter(|value| !value.trim().is_empty()))
            .ok_or_else(|| ConfigError::MissingDatabaseUrl {
                checked: DATABASE_URL_VARS.iter().map(|var| var.to_string()).collect(),
            })?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let max_attempts = match lookup("DB_RETRY_MAX_ATTEMPTS") {
            None => RetryConfig::DEFAULT_MAX_ATTEMPTS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(attempts) if attempts >= 1 => attempts,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DB_RETRY_MAX_ATTEMPTS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", raw),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            bind_address,
            retry: RetryConfig {
                max_attempts,
                ..RetryConfig::default()
            },
        })
    }
}
