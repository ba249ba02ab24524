use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Id of the transient "loading" item shown while a search resolves.
pub const PLACEHOLDER_ID: &str = "__trending";

/// A trending repository as returned by the remote provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub url: String,
    pub title: String,
    pub owner: String,
    /// Primary language, empty when the provider reports none.
    pub language: String,
    pub star_count: u64,
    pub description: String,
}

/// An entry rendered by the host launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: String,
    pub title: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl DisplayItem {
    /// The spinner item shown until trending data is available.
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_ID.to_string(),
            title: "fetching...".to_string(),
            desc: "from Github.com".to_string(),
            icon: Some("#fa fa-circle-o-notch fa-spin".to_string()),
        }
    }
}

/// Incremental reply events sent to the host during a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Items(Vec<DisplayItem>),
    Remove { remove: String },
}

impl Reply {
    pub fn remove_placeholder() -> Self {
        Reply::Remove {
            remove: PLACEHOLDER_ID.to_string(),
        }
    }
}

/// The single cache slot: last successful fetch and when it happened
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheState {
    pub entries: Arc<Vec<RepositoryRecord>>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CacheState {
    /// Returns the entries if they are non-empty and no older than `ttl` at `now`.
    pub fn fresh_entries(&self, now: DateTime<Utc>, ttl: Duration) -> Option<Arc<Vec<RepositoryRecord>>> {
        let fetched_at = self.fetched_at?;
        if self.entries.is_empty() {
            return None;
        }

        // A clock that went backwards yields a negative age, which still counts as fresh
        let fresh = match now.signed_duration_since(fetched_at).to_std() {
            Ok(age) => age <= ttl,
            Err(_) => true,
        };

        fresh.then(|| Arc::clone(&self.entries))
    }

    pub fn replace(&mut self, entries: Arc<Vec<RepositoryRecord>>, fetched_at: DateTime<Utc>) {
        self.entries = entries;
        self.fetched_at = Some(fetched_at);
    }
}
