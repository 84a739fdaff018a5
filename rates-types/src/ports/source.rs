//! Rate source port.
//!
//! Implementations can be HTTP clients, static fixtures, mocks, etc.

use crate::domain::RateTable;
use crate::error::SourceError;

/// A provider of the current official rate table.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Performs a single fetch of the full table.
    ///
    /// The base currency is never part of the returned table.
    async fn fetch(&self) -> Result<RateTable, SourceError>;
}

#[async_trait::async_trait]
impl<S: RateSource + ?Sized> RateSource for std::sync::Arc<S> {
    async fn fetch(&self) -> Result<RateTable, SourceError> {
        (**self).fetch().await
    }
}
