//! Error types for the currency converter.

use rust_decimal::Decimal;
use std::time::Duration;

use crate::domain::CurrencyCode;

/// Domain-level errors (invalid values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Scale of {0} must be positive")]
    ZeroScale(CurrencyCode),

    #[error("Official rate of {code} must be positive, got {rate}")]
    NonPositiveRate { code: CurrencyCode, rate: Decimal },
}

/// Malformed requests. Reported back to the requester, never a system fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Format: 100 or 100 USD to EUR")]
    Empty,

    #[error("Amount cannot be zero")]
    ZeroAmount,

    #[error("Use: /convert 100 or /convert 100 USD to EUR")]
    Malformed,

    #[error("Amount is out of range")]
    AmountOutOfRange,
}

/// Rate source failures (network, upstream status, payload).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate source timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate source returned HTTP {0}")]
    Status(u16),

    #[error("Failed to decode rates: {0}")]
    Decode(String),

    #[error("Rate source returned no usable records")]
    Empty,
}

/// Conversion failures as seen by the requester.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("Currency not found: {0}")]
    UnknownCurrency(CurrencyCode),

    #[error("Exchange rates are unavailable: {0}")]
    RatesUnavailable(#[from] SourceError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Usage(e) => AppError::BadRequest(e.to_string()),
            ConvertError::UnknownCurrency(code) => {
                AppError::NotFound(format!("Currency not found: {}", code))
            }
            ConvertError::RatesUnavailable(_) => {
                AppError::Unavailable("Exchange rates are unavailable".into())
            }
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        ConvertError::from(err).into()
    }
}
