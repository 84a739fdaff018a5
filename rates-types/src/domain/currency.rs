//! ISO-style three-letter currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A three-letter currency code, always stored uppercase.
///
/// Parsing is case-insensitive: `"usd"`, `"Usd"` and `"USD"` are the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a code.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Builds a code from a literal known to be valid.
    pub(crate) fn from_known(code: &'static str) -> Self {
        debug_assert!(Self::new(code).is_ok());
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_uppercased() {
        let code: CurrencyCode = "usd".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code.to_string(), "USD");
    }

    #[test]
    fn test_invalid_codes_rejected() {
        for bad in ["", "US", "USDT", "U5D", "дол"] {
            assert!(
                matches!(CurrencyCode::new(bad), Err(DomainError::InvalidCurrencyCode(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_codes_order_alphabetically() {
        let mut codes: Vec<CurrencyCode> = ["USD", "AMD", "EUR"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        codes.sort();
        let sorted: Vec<&str> = codes.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(sorted, ["AMD", "EUR", "USD"]);
    }
}
