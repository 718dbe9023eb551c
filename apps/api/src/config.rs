use std::time::Duration;

use anyhow::{Context, Result};

use crate::store::DEFAULT_PROFILE_KEY;

/// Application configuration loaded from environment variables.
/// Redis and the recommendation endpoint are optional collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Unset: saved profiles live in process memory only.
    pub redis_url: Option<String>,
    pub profile_key: String,
    /// Unset: every search uses the local catalog.
    pub recommender_url: Option<String>,
    pub recommender_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            redis_url: optional_env("REDIS_URL"),
            profile_key: optional_env("PROFILE_KEY")
                .unwrap_or_else(|| DEFAULT_PROFILE_KEY.to_string()),
            recommender_url: optional_env("RECOMMENDER_URL"),
            recommender_timeout: Duration::from_secs(
                std::env::var("RECOMMENDER_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("RECOMMENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Treats blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
