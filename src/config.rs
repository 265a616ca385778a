//! Environment-driven configuration

use std::env;
use std::time::Duration;

use chrono::NaiveTime;

use crate::availability::{parse_time_of_day, DefaultTimes};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub currency: String,
    pub default_times: DefaultTimes,
    pub vehicle_cache_ttl: Duration,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Fails only when `DATABASE_URL` is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env_opt("DATABASE_URL").ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let defaults = DefaultTimes::default();

        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse_or("PORT", 8080),
            database_url,
            db_max_connections: env_parse_or("DB_MAX_CONNECTIONS", 5),
            currency: env_or("CURRENCY", "MKD"),
            default_times: DefaultTimes {
                pickup: env_time_or("DEFAULT_PICKUP_TIME", defaults.pickup),
                return_time: env_time_or("DEFAULT_RETURN_TIME", defaults.return_time),
            },
            vehicle_cache_ttl: Duration::from_secs(env_parse_or("VEHICLE_CACHE_TTL_SECS", 300)),
            cors_origins: parse_csv(&env_or("CORS_ORIGINS", "")),
        })
    }

    /// Configuration for tests and local tooling
    pub fn for_database(database_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: database_url.to_string(),
            db_max_connections: 1,
            currency: "MKD".to_string(),
            default_times: DefaultTimes::default(),
            vehicle_cache_ttl: Duration::from_secs(300),
            cors_origins: Vec::new(),
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_opt(key)
        .and_then(|raw| raw.parse::<T>().ok())
        .unwrap_or(default)
}

fn env_time_or(key: &str, default: NaiveTime) -> NaiveTime {
    env_opt(key)
        .and_then(|raw| parse_time_of_day(&raw))
        .unwrap_or(default)
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        assert_eq!(
            parse_csv(" https://a.mk , ,https://b.mk"),
            vec!["https://a.mk".to_string(), "https://b.mk".to_string()]
        );
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn test_for_database_defaults() {
        let config = AppConfig::for_database("postgres://localhost/rentals");
        assert_eq!(config.default_times, DefaultTimes::default());
        assert_eq!(config.currency, "MKD");
        assert!(config.cors_origins.is_empty());
    }
}
