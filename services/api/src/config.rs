use std::net::SocketAddr;
use tracing::Level;

/// Largest request age the platform allows a skill to accept.
pub const MAX_TIMESTAMP_TOLERANCE_SECS: i64 = 3600;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// When set, envelopes addressed to any other skill are rejected.
    pub skill_id: Option<String>,
    pub timestamp_tolerance_secs: i64,
    /// When set, quiz questions and tips are drawn from a seeded generator.
    pub random_seed: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let skill_id = std::env::var("SKILL_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        let timestamp_tolerance_secs = match std::env::var("REQUEST_TIMESTAMP_TOLERANCE_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<i64>().map_err(|e| {
                    ConfigError::InvalidValue(
                        "REQUEST_TIMESTAMP_TOLERANCE_SECS".to_string(),
                        e.to_string(),
                    )
                })?;
                if !(1..=MAX_TIMESTAMP_TOLERANCE_SECS).contains(&secs) {
                    return Err(ConfigError::InvalidValue(
                        "REQUEST_TIMESTAMP_TOLERANCE_SECS".to_string(),
                        format!("{} is not between 1 and {}", secs, MAX_TIMESTAMP_TOLERANCE_SECS),
                    ));
                }
                secs
            }
            Err(_) => 150,
        };

        let random_seed = std::env::var("SKILL_RANDOM_SEED")
            .ok()
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidValue("SKILL_RANDOM_SEED".to_string(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            bind_address,
            log_level,
            skill_id,
            timestamp_tolerance_secs,
            random_seed,
        })
    }
}
