//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveTime;

use rates_source::DEFAULT_RATES_URL;
use rates_types::{ConverterSettings, CurrencyCode};

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub rates_url: String,
    pub otlp_endpoint: Option<String>,
    pub settings: ConverterSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = ConverterSettings::default();

        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a port number")?,
            None => 3000,
        };

        let rates_url = lookup("RATES_URL").unwrap_or_else(|| DEFAULT_RATES_URL.to_string());
        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.is_empty());

        let base = match lookup("BASE_CURRENCY") {
            Some(code) => CurrencyCode::new(&code).context("BASE_CURRENCY")?,
            None => defaults.base,
        };
        let base_name = lookup("BASE_CURRENCY_NAME").unwrap_or(defaults.base_name);
        let secondary = match lookup("SECONDARY_CURRENCY") {
            Some(code) => CurrencyCode::new(&code).context("SECONDARY_CURRENCY")?,
            None => defaults.secondary,
        };

        let publication_cutoff = match lookup("PUBLICATION_CUTOFF") {
            Some(time) => NaiveTime::parse_from_str(&time, "%H:%M")
                .context("PUBLICATION_CUTOFF must look like 11:05")?,
            None => defaults.publication_cutoff,
        };

        let chunk_size = match lookup("CHUNK_SIZE") {
            Some(size) => size.parse().context("CHUNK_SIZE must be a positive integer")?,
            None => defaults.chunk_size,
        };
        if chunk_size == 0 {
            anyhow::bail!("CHUNK_SIZE must be a positive integer");
        }

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .context("FETCH_TIMEOUT_SECS must be a number of seconds")?,
            ),
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            port,
            rates_url,
            otlp_endpoint,
            settings: ConverterSettings {
                base,
                base_name,
                secondary,
                publication_cutoff,
                chunk_size,
                fetch_timeout,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rates_url, DEFAULT_RATES_URL);
        assert!(config.otlp_endpoint.is_none());
        assert_eq!(config.settings, ConverterSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("BASE_CURRENCY", "rub"),
            ("SECONDARY_CURRENCY", "BYN"),
            ("PUBLICATION_CUTOFF", "13:30"),
            ("CHUNK_SIZE", "1000"),
            ("FETCH_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.settings.base.as_str(), "RUB");
        assert_eq!(config.settings.secondary.as_str(), "BYN");
        assert_eq!(
            config.settings.publication_cutoff,
            NaiveTime::from_hms_opt(13, 30, 0).unwrap()
        );
        assert_eq!(config.settings.chunk_size, 1000);
        assert_eq!(config.settings.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load(&[("BASE_CURRENCY", "rouble")]).is_err());
        assert!(load(&[("PUBLICATION_CUTOFF", "eleven")]).is_err());
        assert!(load(&[("CHUNK_SIZE", "0")]).is_err());
        assert!(load(&[("PORT", "http")]).is_err());
    }
}
