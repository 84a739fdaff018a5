//! Official rate cache with publication-schedule invalidation.
//!
//! Rates are published once per business day. A cached table is reused until
//! either the calendar date changes or the daily publication cutoff passes
//! for the first time since the last fetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{NaiveDateTime, NaiveTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use rates_types::{Clock, RateSource, RateTable, SourceError, SystemClock};

/// Returns true if a table fetched at `fetched_at` must be refreshed at `now`.
pub fn is_stale(fetched_at: NaiveDateTime, now: NaiveDateTime, cutoff: NaiveTime) -> bool {
    let rolled_over = now.date() > fetched_at.date();
    let crossed_cutoff = now.time() >= cutoff && fetched_at.time() < cutoff;
    rolled_over || crossed_cutoff
}

/// The last successfully fetched table and when it was fetched.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub table: Arc<RateTable>,
    pub fetched_at: NaiveDateTime,
}

/// Shared cache in front of a [`RateSource`].
///
/// Every read goes through one critical section that checks staleness,
/// fetches if needed and commits the new table. Concurrent callers queue on
/// the lock, so one staleness window costs exactly one fetch. Callers that
/// waited out a failed refresh reuse its outcome instead of fetching again.
pub struct RateCache<S: RateSource, C: Clock = SystemClock> {
    source: S,
    clock: C,
    publication_cutoff: NaiveTime,
    fetch_timeout: Duration,
    failed_refreshes: AtomicU64,
    state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    snapshot: Option<Snapshot>,
    last_error: Option<SourceError>,
}

impl CacheState {
    fn fallback(&self, err: SourceError) -> Result<Arc<RateTable>, SourceError> {
        match &self.snapshot {
            Some(previous) => {
                warn!(fetched_at = %previous.fetched_at, "Serving previously fetched rates");
                Ok(previous.table.clone())
            }
            None => Err(err),
        }
    }
}

impl<S: RateSource, C: Clock> RateCache<S, C> {
    /// Creates an empty cache. Nothing is fetched until the first read.
    pub fn new(source: S, clock: C, publication_cutoff: NaiveTime, fetch_timeout: Duration) -> Self {
        Self {
            source,
            clock,
            publication_cutoff,
            fetch_timeout,
            failed_refreshes: AtomicU64::new(0),
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Returns the current table, refreshing it first if it is stale.
    ///
    /// A failed refresh falls back to the previous table; the error is only
    /// returned when nothing has been fetched yet.
    #[tracing::instrument(skip(self))]
    pub async fn get_table(&self) -> Result<Arc<RateTable>, SourceError> {
        let failures_seen = self.failed_refreshes.load(Ordering::Acquire);
        let mut state = self.state.lock().await;

        let now = self.clock.now();
        if let Some(fresh) = state
            .snapshot
            .as_ref()
            .filter(|snapshot| !is_stale(snapshot.fetched_at, now, self.publication_cutoff))
        {
            return Ok(fresh.table.clone());
        }

        // a refresh failed while this caller was queued on the lock
        if self.failed_refreshes.load(Ordering::Acquire) != failures_seen {
            if let Some(err) = state.last_error.clone() {
                return state.fallback(err);
            }
        }

        match self.fetch().await {
            Ok(table) => {
                let snapshot = Snapshot {
                    table: Arc::new(table),
                    fetched_at: self.clock.now(),
                };
                info!(
                    records = snapshot.table.len(),
                    fetched_at = %snapshot.fetched_at,
                    "Exchange rates updated"
                );
                let table = snapshot.table.clone();
                state.snapshot = Some(snapshot);
                state.last_error = None;
                Ok(table)
            }
            Err(err) => {
                error!(error = %err, "Failed to update exchange rates");
                state.last_error = Some(err.clone());
                self.failed_refreshes.fetch_add(1, Ordering::Release);
                state.fallback(err)
            }
        }
    }

    /// The cached table and its fetch time, without triggering a refresh.
    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.state.lock().await.snapshot.clone()
    }

    async fn fetch(&self) -> Result<RateTable, SourceError> {
        tokio::time::timeout(self.fetch_timeout, self.source.fetch())
            .await
            .map_err(|_| SourceError::Timeout(self.fetch_timeout))?
    }
}
