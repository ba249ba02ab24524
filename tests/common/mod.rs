#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use github_trending_plugin::{Clock, RepositoryRecord, Result, TrendingError, TrendingSource, UrlOpener};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn record(url: &str, language: &str) -> RepositoryRecord {
    RepositoryRecord {
        url: url.to_string(),
        title: "t".to_string(),
        owner: "o".to_string(),
        language: language.to_string(),
        star_count: 5,
        description: "d".to_string(),
    }
}

/// Source that replays scripted outcomes and counts calls
pub struct FakeSource {
    calls: AtomicUsize,
    outcomes: Mutex<VecDeque<Result<Vec<RepositoryRecord>>>>,
    delay: Duration,
}

impl FakeSource {
    pub fn new(outcomes: Vec<Result<Vec<RepositoryRecord>>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcomes: Mutex::new(outcomes.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrendingSource for FakeSource {
    async fn fetch_trending(&self) -> Result<Vec<RepositoryRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TrendingError::Fetch("no scripted outcome left".to_string())))
    }
}

/// Clock that only moves when told to
pub struct ManualClock {
    seconds: AtomicI64,
}

impl ManualClock {
    pub fn new(seconds: i64) -> Self {
        Self {
            seconds: AtomicI64::new(seconds),
        }
    }

    pub fn set(&self, seconds: i64) {
        self.seconds.store(seconds, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.seconds.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.seconds.load(Ordering::SeqCst), 0).unwrap()
    }
}

/// Opener that records every URL it is asked to open
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
