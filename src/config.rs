//! Service configuration loaded from the environment

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Currency code attached to money in responses
    pub default_currency: String,
    pub draft_capacity: u64,
    pub draft_ttl: Duration,
    pub draft_idle: Duration,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("PORT", 8090),
            default_currency: std::env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| "INR".into()),
            draft_capacity: env_or("DRAFT_CAPACITY", 10_000),
            draft_ttl: Duration::from_secs(env_or("DRAFT_TTL_SECS", 2 * 60 * 60)),
            draft_idle: Duration::from_secs(env_or("DRAFT_IDLE_SECS", 30 * 60)),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8090,
            default_currency: "INR".into(),
            draft_capacity: 10_000,
            draft_ttl: Duration::from_secs(2 * 60 * 60),
            draft_idle: Duration::from_secs(30 * 60),
        }
    }
}
