//! Official rate records and the table they are published in.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::CurrencyCode;
use crate::error::DomainError;

/// One official rate: `official_rate` units of the base currency buy
/// `scale` units of `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateRecord {
    code: CurrencyCode,
    name: String,
    official_rate: Decimal,
    scale: u32,
}

impl RateRecord {
    /// Creates a record, rejecting zero scales and non-positive rates.
    pub fn new(
        code: CurrencyCode,
        name: impl Into<String>,
        official_rate: Decimal,
        scale: u32,
    ) -> Result<Self, DomainError> {
        if scale == 0 {
            return Err(DomainError::ZeroScale(code));
        }
        if official_rate <= Decimal::ZERO {
            return Err(DomainError::NonPositiveRate {
                code,
                rate: official_rate,
            });
        }
        Ok(Self {
            code,
            name: name.into(),
            official_rate,
            scale,
        })
    }

    /// The synthetic record for the base currency (rate 1, scale 1).
    pub fn base(code: CurrencyCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            official_rate: Decimal::ONE,
            scale: 1,
        }
    }

    pub fn code(&self) -> &CurrencyCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn official_rate(&self) -> Decimal {
        self.official_rate
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Value of a single unit of this currency in the base currency.
    pub fn unit_value(&self) -> Decimal {
        // scale >= 1, so the quotient never exceeds official_rate
        self.official_rate / Decimal::from(self.scale)
    }
}

/// A complete set of rates from one successful fetch.
///
/// Tables are never edited after construction; a refresh builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    records: BTreeMap<CurrencyCode, RateRecord>,
}

impl RateTable {
    /// Builds a table keyed by code. A later record for the same code wins.
    pub fn from_records(records: impl IntoIterator<Item = RateRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.code.clone(), record))
            .collect();
        Self { records }
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&RateRecord> {
        self.records.get(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending code order.
    pub fn records(&self) -> impl Iterator<Item = &RateRecord> {
        self.records.values()
    }
}

/// A cached table seen together with the synthetic base-currency record.
///
/// The base record shadows any upstream record with the same code, and the
/// underlying table is left untouched.
#[derive(Debug, Clone)]
pub struct RateView {
    table: Arc<RateTable>,
    base: RateRecord,
}

impl RateView {
    pub fn new(table: Arc<RateTable>, base: RateRecord) -> Self {
        Self { table, base }
    }

    pub fn base(&self) -> &RateRecord {
        &self.base
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&RateRecord> {
        if *code == self.base.code {
            Some(&self.base)
        } else {
            self.table.get(code)
        }
    }

    /// The base record first, then the table in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = &RateRecord> {
        std::iter::once(&self.base).chain(
            self.table
                .records()
                .filter(move |record| record.code != self.base.code),
        )
    }
}
