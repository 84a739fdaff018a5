//! Domain models for the currency converter.

pub mod conversion;
pub mod currency;
pub mod rate;
pub mod settings;

pub use conversion::{ConversionRequest, ConversionResult};
pub use currency::CurrencyCode;
pub use rate::{RateRecord, RateTable, RateView};
pub use settings::{ConverterSettings, DEFAULT_CHUNK_SIZE, DEFAULT_FETCH_TIMEOUT, DEFAULT_PUBLICATION_CUTOFF};
