//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not on concrete
//! HTTP clients or the system clock.

mod clock;
mod source;

pub use clock::{Clock, SystemClock};
pub use source::RateSource;
