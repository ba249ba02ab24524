use crate::error::{Result, TrendingError};
use crate::github::TrendingSource;
use crate::models::{CacheState, RepositoryRecord};
use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// How long a fetched trending list is served before refetching: 30 minutes.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Time source for cache expiry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

type Entries = Arc<Vec<RepositoryRecord>>;
type InFlight = Shared<BoxFuture<'static, Result<Entries>>>;

struct Slot {
    state: CacheState,
    in_flight: Option<InFlight>,
}

/// Single-slot, TTL-gated cache of the trending list.
///
/// Callers that miss while a fetch is already running attach to that fetch
/// instead of starting another one, so there is at most one outstanding call
/// to the source per cache.
pub struct TrendingCache {
    source: Arc<dyn TrendingSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    slot: Arc<Mutex<Slot>>,
}

impl TrendingCache {
    pub fn new(source: Arc<dyn TrendingSource>) -> Self {
        Self::with_clock(source, Arc::new(SystemClock), CACHE_TTL)
    }

    pub fn with_clock(source: Arc<dyn TrendingSource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            slot: Arc::new(Mutex::new(Slot {
                state: CacheState::default(),
                in_flight: None,
            })),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached list, fetching it first when it is missing or expired.
    ///
    /// A failed fetch leaves the cache untouched and is returned as is; stale
    /// entries are never served in its place.
    pub async fn get(&self) -> Result<Entries> {
        let fetch = {
            let mut slot = self.slot.lock().await;

            if let Some(entries) = slot.state.fresh_entries(self.clock.now(), self.ttl) {
                debug!(count = entries.len(), "Trending cache hit");
                return Ok(entries);
            }

            match slot.in_flight.clone() {
                Some(fetch) => {
                    debug!("Trending cache miss, joining in-flight fetch");
                    fetch
                }
                None => {
                    debug!("Trending cache miss, fetching");
                    let fetch = self.start_fetch();
                    slot.in_flight = Some(fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Populate the cache in the background, discarding the outcome.
    pub fn warm(self: &Arc<Self>) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            match cache.get().await {
                Ok(entries) => info!(count = entries.len(), "Trending cache warmed"),
                Err(e) => debug!(error = %e, "Trending cache not warmed"),
            }
        })
    }

    /// A copy of the current cache slot.
    pub async fn snapshot(&self) -> CacheState {
        self.slot.lock().await.state.clone()
    }

    // The fetch runs on its own task, so it completes and fills the slot even
    // when every caller waiting on it has been dropped.
    fn start_fetch(&self) -> InFlight {
        let source = Arc::clone(&self.source);
        let clock = Arc::clone(&self.clock);
        let slot = Arc::clone(&self.slot);

        let task = tokio::spawn({
            let slot = Arc::clone(&slot);
            async move {
                let result = source.fetch_trending().await.map(Arc::new);

                let mut guard = slot.lock().await;
                guard.in_flight = None;
                match &result {
                    Ok(entries) => {
                        guard.state.replace(Arc::clone(entries), clock.now());
                        debug!(count = entries.len(), "Trending cache refreshed");
                    }
                    Err(e) => warn!(error = %e, "Trending fetch failed"),
                }

                result
            }
        });

        async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    // The task never reached its cleanup, so release the slot here
                    warn!(error = %e, "Trending fetch task aborted");
                    slot.lock().await.in_flight = None;
                    Err(TrendingError::Fetch(format!("fetch task failed: {}", e)))
                }
            }
        }
        .boxed()
        .shared()
    }
}
