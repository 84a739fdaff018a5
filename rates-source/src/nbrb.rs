//! National Bank of the Republic of Belarus rate source.

use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use rates_types::{CurrencyCode, RateRecord, RateSource, RateTable, SourceError};

/// Daily official rates of all currencies the bank publishes.
pub const DEFAULT_RATES_URL: &str = "https://api.nbrb.by/exrates/rates?periodicity=0";

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct NbrbRate {
    #[serde(rename = "Cur_Abbreviation")]
    abbreviation: String,
    #[serde(rename = "Cur_Name")]
    name: String,
    #[serde(rename = "Cur_OfficialRate")]
    official_rate: Option<f64>,
    #[serde(rename = "Cur_Scale")]
    scale: u32,
}

impl NbrbRate {
    fn into_record(self) -> Result<RateRecord, String> {
        let code = CurrencyCode::new(&self.abbreviation).map_err(|e| e.to_string())?;
        let rate = self
            .official_rate
            .ok_or_else(|| format!("{} has no official rate", code))?;
        // Shortest round-trip text keeps 3.2145 as exactly 3.2145
        let rate = Decimal::from_str(&rate.to_string()).map_err(|e| e.to_string())?;
        RateRecord::new(code, self.name, rate, self.scale).map_err(|e| e.to_string())
    }
}

/// Decodes a rates payload, skipping records that cannot be used.
pub fn parse_rates(body: &[u8]) -> Result<RateTable, SourceError> {
    let raw: Vec<NbrbRate> =
        serde_json::from_slice(body).map_err(|e| SourceError::Decode(e.to_string()))?;

    let records: Vec<RateRecord> = raw
        .into_iter()
        .filter_map(|rate| match rate.into_record() {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::warn!(%reason, "Skipping unusable rate record");
                None
            }
        })
        .collect();

    if records.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(RateTable::from_records(records))
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Fetches the current table from the bank's JSON API.
///
/// The bank's certificate chain does not validate against common trust
/// stores, so certificate verification is disabled for this client.
pub struct NbrbRateSource {
    url: String,
    timeout: Duration,
    http: Client,
}

impl NbrbRateSource {
    /// Creates a source for the given endpoint.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            timeout,
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SourceError {
        if err.is_timeout() {
            SourceError::Timeout(self.timeout)
        } else {
            SourceError::Network(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl RateSource for NbrbRateSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<RateTable, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "Rate source returned error status");
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let table = parse_rates(&body)?;
        tracing::debug!(records = table.len(), "Fetched official rates");
        Ok(table)
    }
}
