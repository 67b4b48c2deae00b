//! Runtime settings read from `TYRAS_*` environment variables.

use std::{sync::OnceLock, time::Duration};

use thiserror::Error;
use tracing::Level;
use url::Url;

use crate::infra::backend::SIMULATED_LATENCY;

pub const BACKEND_URL_VAR: &str = "TYRAS_BACKEND_URL";
pub const LATENCY_VAR: &str = "TYRAS_LATENCY_MS";
pub const QUOTE_SEED_VAR: &str = "TYRAS_QUOTE_SEED";
pub const LOG_VAR: &str = "TYRAS_LOG";

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Lead service to post to; simulated when unset.
    pub backend_url: Option<Url>,
    pub latency: Duration,
    /// Pins the quote calculator's distance draws.
    pub quote_seed: Option<u64>,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            latency: SIMULATED_LATENCY,
            quote_seed: None,
            log_level: Level::INFO,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be one of trace, debug, info, warn, error; got {value:?}")]
    InvalidLevel { key: &'static str, value: String },
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let backend_url = read(BACKEND_URL_VAR)
            .map(|value| {
                Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
                    key: BACKEND_URL_VAR,
                    value,
                })
            })
            .transpose()?;

        let latency = match read(LATENCY_VAR) {
            Some(value) => Duration::from_millis(parse_number(LATENCY_VAR, value)?),
            None => defaults.latency,
        };

        let quote_seed = read(QUOTE_SEED_VAR)
            .map(|value| parse_number(QUOTE_SEED_VAR, value))
            .transpose()?;

        let log_level = match read(LOG_VAR) {
            Some(value) => value.parse::<Level>().map_err(|_| ConfigError::InvalidLevel {
                key: LOG_VAR,
                value,
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            backend_url,
            latency,
            quote_seed,
            log_level,
        })
    }
}

fn parse_number(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}

/// Stores the process-wide config; later calls keep the first value.
pub fn install(config: SiteConfig) -> &'static SiteConfig {
    CONFIG.get_or_init(|| config)
}

pub fn current() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.latency, Duration::from_millis(1500));
    }

    #[test]
    fn reads_every_setting() {
        let config = SiteConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "https://leads.example.com/v1"),
            (LATENCY_VAR, "250"),
            (QUOTE_SEED_VAR, " 42 "),
            (LOG_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(
            config.backend_url.as_ref().map(Url::as_str),
            Some("https://leads.example.com/v1")
        );
        assert_eq!(config.latency, Duration::from_millis(250));
        assert_eq!(config.quote_seed, Some(42));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = SiteConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, "  "), (QUOTE_SEED_VAR, "")]))
            .unwrap();
        assert_eq!(config.backend_url, None);
        assert_eq!(config.quote_seed, None);
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            SiteConfig::from_lookup(lookup(&[(LATENCY_VAR, "-5")])),
            Err(ConfigError::InvalidNumber {
                key: LATENCY_VAR,
                value: "-5".to_string()
            })
        );
        assert!(matches!(
            SiteConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, "leads")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            SiteConfig::from_lookup(lookup(&[(LOG_VAR, "loud")])),
            Err(ConfigError::InvalidLevel { .. })
        ));
    }
}
