pub mod cache;
pub mod error;
pub mod format;
pub mod github;
pub mod models;
pub mod plugin;
pub mod types;

pub use cache::{Clock, SystemClock, TrendingCache, CACHE_TTL};
pub use error::{Result, TrendingError};
pub use github::{ClientConfig, GitHubClient, TrendingSource};
pub use models::{CacheState, DisplayItem, RepositoryRecord, Reply, PLACEHOLDER_ID};
pub use plugin::{SystemOpener, TrendingPlugin, UrlOpener};
