//! # Rates Types
//!
//! Domain types and port traits for the official-rate currency converter.
//! This crate has ZERO IO dependencies - only data structures,
//! conversion rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Currency codes, rate records and tables, conversions
//! - `ports/` - Trait definitions that adapters must implement
//! - `format` - Display rounding shared by every surface
//! - `dto` - Data Transfer Objects for API boundaries
//! - `error` - Domain, usage, source and application errors

pub mod domain;
pub mod dto;
pub mod error;
pub mod format;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConversionRequest, ConversionResult, ConverterSettings, CurrencyCode, DEFAULT_CHUNK_SIZE,
    DEFAULT_FETCH_TIMEOUT, DEFAULT_PUBLICATION_CUTOFF, RateRecord, RateTable, RateView,
};
pub use dto::*;
pub use error::{AppError, ConvertError, DomainError, SourceError, UsageError};
pub use format::format_amount;
pub use ports::{Clock, RateSource, SystemClock};
