use crate::cache::TrendingCache;
use crate::error::{Result, TrendingError};
use crate::format::format;
use crate::github::TrendingSource;
use crate::models::{DisplayItem, Reply, PLACEHOLDER_ID};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, info};

/// Opens a URL in the user's default application
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

/// Opener backed by the platform's launcher command
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&self, url: &str) -> Result<()> {
        let status = Self::command(url)
            .status()
            .await
            .map_err(|e| TrendingError::Open {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(TrendingError::Open {
                url: url.to_string(),
                reason: format!("opener exited with {}", status),
            })
        }
    }
}

/// The three lifecycle hooks the launcher calls.
///
/// Holds no per-search state; everything shared between calls lives in the
/// trending cache.
pub struct TrendingPlugin {
    cache: Arc<TrendingCache>,
    opener: Arc<dyn UrlOpener>,
}

impl TrendingPlugin {
    pub fn new(cache: Arc<TrendingCache>, opener: Arc<dyn UrlOpener>) -> Self {
        Self { cache, opener }
    }

    /// Plugin backed by `source`, the system clock and the platform opener.
    pub fn with_source(source: Arc<dyn TrendingSource>) -> Self {
        Self::new(Arc::new(TrendingCache::new(source)), Arc::new(SystemOpener))
    }

    pub fn cache(&self) -> &Arc<TrendingCache> {
        &self.cache
    }

    /// Start filling the cache without waiting for it.
    pub fn startup(&self) {
        debug!("Plugin startup, warming trending cache");
        // Detached; the outcome is logged by the cache
        drop(self.cache.warm());
    }

    /// Resolve the trending list. `query` is ignored.
    ///
    /// `reply` receives the placeholder before any I/O and a removal of it
    /// once the search settles, whether it succeeded or not.
    pub async fn search<R>(&self, query: &str, mut reply: R) -> Result<Vec<DisplayItem>>
    where
        R: FnMut(Reply) + Send,
    {
        debug!(query, "Search requested");
        reply(Reply::Items(vec![DisplayItem::placeholder()]));

        match self.cache.get().await {
            Ok(records) => {
                reply(Reply::remove_placeholder());
                Ok(format(&records))
            }
            Err(e) => {
                debug!(error = %e, "Search failed");
                reply(Reply::remove_placeholder());
                Err(e)
            }
        }
    }

    /// Open the selected item. The placeholder item is ignored.
    pub async fn execute(&self, id: &str, _payload: &serde_json::Value) -> Result<()> {
        if id == PLACEHOLDER_ID {
            debug!("Ignoring selection of the placeholder item");
            return Ok(());
        }

        info!(url = id, "Opening repository");
        self.opener.open(id).await
    }
}
