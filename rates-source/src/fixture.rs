//! Static rates for development, offline runs and tests.

use rust_decimal::Decimal;

use rates_types::{CurrencyCode, DomainError, RateRecord, RateSource, RateTable, SourceError};

// code, name, official rate (BYN), scale
const SAMPLE_RATES: &[(&str, &str, i64, u32, u32)] = &[
    ("CNY", "Chinese yuan", 44_521, 4, 10),
    ("EUR", "Euro", 34_127, 4, 1),
    ("GBP", "Pound sterling", 40_018, 4, 1),
    ("JPY", "Japanese yen", 20_735, 4, 100),
    ("KZT", "Kazakhstani tenge", 66_041, 4, 1000),
    ("PLN", "Polish zloty", 79_541, 4, 10),
    ("RUB", "Russian ruble", 36_142, 4, 100),
    ("UAH", "Ukrainian hryvnia", 77_917, 4, 100),
    ("USD", "US dollar", 31_936, 4, 1),
];

/// A rate source that always returns the same table.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    table: RateTable,
}

impl StaticRateSource {
    pub fn new(records: impl IntoIterator<Item = RateRecord>) -> Self {
        Self {
            table: RateTable::from_records(records),
        }
    }

    /// A realistic snapshot of BYN-based official rates.
    pub fn sample() -> Result<Self, DomainError> {
        let records = SAMPLE_RATES
            .iter()
            .map(|&(code, name, mantissa, places, scale)| {
                RateRecord::new(
                    CurrencyCode::new(code)?,
                    name,
                    Decimal::new(mantissa, places),
                    scale,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records))
    }
}

#[async_trait::async_trait]
impl RateSource for StaticRateSource {
    async fn fetch(&self) -> Result<RateTable, SourceError> {
        if self.table.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_sample_table() {
        let source = StaticRateSource::sample().unwrap();
        let table = source.fetch().await.unwrap();
        assert_eq!(table.len(), SAMPLE_RATES.len());

        let rub = table.get(&"RUB".parse().unwrap()).unwrap();
        assert_eq!(rub.official_rate(), dec!(3.6142));
        assert_eq!(rub.scale(), 100);
    }

    #[tokio::test]
    async fn test_empty_source_fails() {
        let source = StaticRateSource::new([]);
        assert!(matches!(source.fetch().await, Err(SourceError::Empty)));
    }
}
