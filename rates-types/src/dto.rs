//! Data Transfer Objects for the HTTP boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{ConversionResult, CurrencyCode, RateRecord};
use crate::format::format_amount;

/// Query string of `GET /api/convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertQuery {
    /// Request text, e.g. `100` or `100 USD to EUR`.
    pub q: String,
}

/// A conversion with every number already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub amount: String,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub converted: String,
    pub rate: String,
}

impl From<&ConversionResult> for ConvertResponse {
    fn from(result: &ConversionResult) -> Self {
        Self {
            amount: format_amount(result.amount),
            from: result.from.clone(),
            to: result.to.clone(),
            converted: format_amount(result.converted),
            rate: format_amount(result.cross_rate),
        }
    }
}

/// One row of `GET /api/currencies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub code: CurrencyCode,
    pub name: String,
    pub rate: Decimal,
    pub scale: u32,
}

impl From<&RateRecord> for CurrencyEntry {
    fn from(record: &RateRecord) -> Self {
        Self {
            code: record.code().clone(),
            name: record.name().to_string(),
            rate: record.official_rate(),
            scale: record.scale(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyListResponse {
    pub base: CurrencyCode,
    pub currencies: Vec<CurrencyEntry>,
}

/// A chat message as delivered by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Replies to send back, in order. Empty when the message is not ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub replies: Vec<String>,
}
