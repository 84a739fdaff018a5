//! # Converter Hex
//!
//! Application layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `cache` - Official rate cache with publication-schedule invalidation
//! - `parse` - Request grammars (bare amount, `<amount> <FROM> to <TO>`)
//! - `service` - Application service (orchestrates parsing, cache, conversion)
//! - `router` / `reply` - Chat message routing and reply rendering
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: RateSource`, allowing different rate
//! sources to be injected.

pub mod cache;
pub mod inbound;
pub mod parse;
pub mod reply;
mod router;
pub mod service;


pub use cache::{RateCache, Snapshot, is_stale};
pub use service::ConverterService;
