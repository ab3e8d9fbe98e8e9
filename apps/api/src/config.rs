use std::time::Duration;

use anyhow::{Context, Result};

use crate::composer::{RedactionMode, StrategyKind};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub strategy: StrategyKind,
    pub redaction: RedactionMode,
    pub generation_delay: Duration,
    /// Fixed seed for phrase-variant selection. `None` seeds from entropy.
    pub composer_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let strategy = match lookup("COMPOSER_STRATEGY") {
            Some(raw) => raw
                .parse::<StrategyKind>()
                .map_err(anyhow::Error::msg)
                .context("COMPOSER_STRATEGY is invalid")?,
            None => StrategyKind::default(),
        };

        let redaction = match lookup("REDACTION_MODE") {
            Some(raw) => raw
                .parse::<RedactionMode>()
                .map_err(anyhow::Error::msg)
                .context("REDACTION_MODE is invalid")?,
            None => RedactionMode::default(),
        };

        let delay_ms = lookup("GENERATION_DELAY_MS")
            .unwrap_or_else(|| "1500".to_string())
            .parse::<u64>()
            .context("GENERATION_DELAY_MS must be a whole number of milliseconds")?;

        let composer_seed = lookup("COMPOSER_SEED")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("COMPOSER_SEED must be an unsigned integer")?;

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            strategy,
            redaction,
            generation_delay: Duration::from_millis(delay_ms),
            composer_seed,
        })
    }
}
