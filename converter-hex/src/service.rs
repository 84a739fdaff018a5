//! Converter Application Service
//!
//! Orchestrates parsing, the rate cache and conversion.
//! Contains NO transport logic - pure business orchestration.

use rates_types::{
    Clock, ConversionRequest, ConversionResult, ConvertError, ConverterSettings, RateSource,
    RateView, SourceError, SystemClock, UsageError,
};

use crate::cache::{RateCache, Snapshot};
use crate::parse;

/// Application service for conversions.
///
/// Generic over `S: RateSource` - the adapter is injected at compile time.
/// The clock is a parameter too so tests can drive the publication schedule.
pub struct ConverterService<S: RateSource, C: Clock = SystemClock> {
    cache: RateCache<S, C>,
    settings: ConverterSettings,
}

impl<S: RateSource> ConverterService<S> {
    /// Creates a service reading the host's local time.
    pub fn new(source: S, settings: ConverterSettings) -> Self {
        Self::with_clock(source, SystemClock, settings)
    }
}

impl<S: RateSource, C: Clock> ConverterService<S, C> {
    pub fn with_clock(source: S, clock: C, settings: ConverterSettings) -> Self {
        let cache = RateCache::new(
            source,
            clock,
            settings.publication_cutoff,
            settings.fetch_timeout,
        );
        Self { cache, settings }
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    /// The cached table, if any, without refreshing it.
    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.cache.snapshot().await
    }

    /// Parses request text in either accepted grammar.
    pub fn parse(&self, text: &str) -> Result<ConversionRequest, UsageError> {
        parse::parse_request(text, &self.settings)
    }

    /// Parses and converts request text.
    #[tracing::instrument(skip(self))]
    pub async fn convert_text(&self, text: &str) -> Result<ConversionResult, ConvertError> {
        let request = self.parse(text)?;
        self.convert(&request).await
    }

    /// Converts a parsed request.
    ///
    /// Same-currency requests are answered without touching the cache.
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConvertError> {
        if request.is_same_currency() {
            return Ok(ConversionResult::identity(request));
        }

        let rates = self.rates().await?;
        let result = request.convert(&rates)?;
        tracing::debug!(
            from = %result.from,
            to = %result.to,
            rate = %result.cross_rate,
            "Converted"
        );
        Ok(result)
    }

    /// Current rates with the base currency merged in.
    ///
    /// Also backs the currency listing: [`RateView::entries`] yields the base
    /// currency first, then every fetched code in ascending order.
    pub async fn rates(&self) -> Result<RateView, SourceError> {
        let table = self.cache.get_table().await?;
        Ok(RateView::new(table, self.settings.base_record()))
    }
}
