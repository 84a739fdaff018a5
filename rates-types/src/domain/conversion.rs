//! Conversion requests and their results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CurrencyCode, RateView};
use crate::error::{ConvertError, UsageError};

/// A parsed request: convert `amount` of `from` into `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: Decimal, from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { amount, from, to }
    }

    /// True when no rates are needed to answer the request.
    pub fn is_same_currency(&self) -> bool {
        self.from == self.to
    }

    /// Converts through the base-currency unit values of both codes.
    pub fn convert(&self, rates: &RateView) -> Result<ConversionResult, ConvertError> {
        let from = rates
            .get(&self.from)
            .ok_or_else(|| ConvertError::UnknownCurrency(self.from.clone()))?;
        let to = rates
            .get(&self.to)
            .ok_or_else(|| ConvertError::UnknownCurrency(self.to.clone()))?;

        let unit_from = from.unit_value();
        let unit_to = to.unit_value();

        let converted = self
            .amount
            .checked_mul(unit_from)
            .and_then(|base| base.checked_div(unit_to))
            .ok_or(UsageError::AmountOutOfRange)?;
        let cross_rate = unit_from
            .checked_div(unit_to)
            .ok_or(UsageError::AmountOutOfRange)?;

        Ok(ConversionResult {
            amount: self.amount,
            from: self.from.clone(),
            to: self.to.clone(),
            converted,
            cross_rate,
        })
    }
}

/// Outcome of a conversion, kept unrounded until formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub converted: Decimal,
    /// Value of one `from` unit expressed in `to`.
    pub cross_rate: Decimal,
}

impl ConversionResult {
    /// Result of a request whose source and target currency are the same.
    pub fn identity(request: &ConversionRequest) -> Self {
        Self {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
            converted: request.amount,
            cross_rate: Decimal::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RateRecord, RateTable};
    use crate::format::format_amount;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    fn view() -> RateView {
        let table = RateTable::from_records([
            RateRecord::new(code("USD"), "US dollar", dec!(2.9436), 1).unwrap(),
            RateRecord::new(code("EUR"), "Euro", dec!(3.4127), 1).unwrap(),
            RateRecord::new(code("RUB"), "Russian ruble", dec!(3.6142), 100).unwrap(),
            RateRecord::new(code("JPY"), "Japanese yen", dec!(1.9532), 100).unwrap(),
        ]);
        RateView::new(Arc::new(table), RateRecord::base(code("BYN"), "Belarusian ruble"))
    }

    #[test]
    fn test_convert_from_base() {
        let req = ConversionRequest::new(dec!(100), code("BYN"), code("RUB"));
        let result = req.convert(&view()).unwrap();
        assert_eq!(format_amount(result.converted), "2766.86");
        assert_eq!(format_amount(result.cross_rate), "27.67");
    }

    #[test]
    fn test_convert_cross_rate_between_non_base_currencies() {
        let req = ConversionRequest::new(dec!(10), code("USD"), code("EUR"));
        let result = req.convert(&view()).unwrap();
        assert_eq!(result.cross_rate, dec!(2.9436) / dec!(3.4127));
        assert_eq!(format_amount(result.converted), "8.63");
        assert_eq!(format_amount(result.cross_rate), "0.862543");
    }

    #[test]
    fn test_unknown_currency() {
        let req = ConversionRequest::new(dec!(10), code("USD"), code("XYZ"));
        let err = req.convert(&view()).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownCurrency(c) if c.as_str() == "XYZ"));
    }

    #[test]
    fn test_round_trip_recovers_amount() {
        let rates = view();
        for (from, to) in [("USD", "JPY"), ("RUB", "EUR"), ("BYN", "USD")] {
            let amount = dec!(1234.56);
            let there = ConversionRequest::new(amount, code(from), code(to))
                .convert(&rates)
                .unwrap();
            let back = ConversionRequest::new(there.converted, code(to), code(from))
                .convert(&rates)
                .unwrap();
            assert_eq!(format_amount(back.converted), format_amount(amount));
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let req = ConversionRequest::new(Decimal::MAX, code("USD"), code("RUB"));
        let err = req.convert(&view()).unwrap_err();
        assert!(matches!(err, ConvertError::Usage(UsageError::AmountOutOfRange)));
    }
}
