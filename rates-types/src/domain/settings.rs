//! Deployment-level constants of the converter.

use chrono::NaiveTime;
use std::time::Duration;

use super::{CurrencyCode, RateRecord};

/// Time of day after which the next official publication is assumed to be out.
pub const DEFAULT_PUBLICATION_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(11, 5, 0) {
    Some(time) => time,
    None => panic!("invalid publication cutoff"),
};

/// Longest message the chat transport accepts, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Upper bound on a single rate fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Currencies and schedule the converter runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterSettings {
    /// Currency every official rate is expressed in.
    pub base: CurrencyCode,
    pub base_name: String,
    /// Counterpart of the base currency for bare-number requests.
    pub secondary: CurrencyCode,
    pub publication_cutoff: NaiveTime,
    pub chunk_size: usize,
    pub fetch_timeout: Duration,
}

impl ConverterSettings {
    /// The synthetic record merged into every table lookup.
    pub fn base_record(&self) -> RateRecord {
        RateRecord::base(self.base.clone(), self.base_name.clone())
    }
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            base: CurrencyCode::from_known("BYN"),
            base_name: "Belarusian ruble".to_string(),
            secondary: CurrencyCode::from_known("RUB"),
            publication_cutoff: DEFAULT_PUBLICATION_CUTOFF,
            chunk_size: DEFAULT_CHUNK_SIZE,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
