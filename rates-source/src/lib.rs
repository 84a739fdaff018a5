//! # Rates Source
//!
//! Adapters implementing the `RateSource` port:
//!
//! - [`NbrbRateSource`] - the National Bank of the Republic of Belarus JSON API
//! - [`StaticRateSource`] - fixed rates for development and testing
//!
//! # Example
//! ```no_run
//! use rates_source::{NbrbRateSource, DEFAULT_RATES_URL};
//! use rates_types::{RateSource, DEFAULT_FETCH_TIMEOUT};
//!
//! # async fn run() -> Result<(), rates_types::SourceError> {
//! let source = NbrbRateSource::new(DEFAULT_RATES_URL, DEFAULT_FETCH_TIMEOUT)?;
//! let table = source.fetch().await?;
//! println!("{} currencies", table.len());
//! # Ok(())
//! # }
//! ```

mod fixture;
mod nbrb;

pub use fixture::StaticRateSource;
pub use nbrb::{DEFAULT_RATES_URL, NbrbRateSource, parse_rates};
