#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tubegate_application::ports::{BlockedChannelRepository, SettingsRepository, UpstreamClient};
use tubegate_domain::{
    AppSettings, ChannelName, DomainError, SearchPage, SearchQuery, TrendingParams, VideoItem,
};

pub fn video(id: &str) -> VideoItem {
    VideoItem::new(json!({
        "id": id,
        "snippet": { "title": format!("Video {id}"), "channelTitle": "Test Channel" }
    }))
}

// ============================================================================
// Mock UpstreamClient
// ============================================================================

pub struct MockUpstreamClient {
    trending_calls: AtomicU64,
    search_calls: AtomicU64,
    should_fail: AtomicBool,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self {
            trending_calls: AtomicU64::new(0),
            search_calls: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn trending_calls(&self) -> u64 {
        self.trending_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> u64 {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn fetch_trending(
        &self,
        _params: &TrendingParams,
    ) -> Result<Vec<VideoItem>, DomainError> {
        self.trending_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::UpstreamFetch("HTTP 500".to_string()));
        }
        Ok(vec![video("t1"), video("t2")])
    }

    async fn fetch_search(
        &self,
        query: &SearchQuery,
        page_token: &str,
        _max_results: u32,
    ) -> Result<SearchPage, DomainError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::UpstreamFetch("HTTP 403".to_string()));
        }

        // The last page carries no continuation token.
        let next = (page_token != "LAST").then(|| "NEXT".to_string());
        Ok(SearchPage::new(
            next,
            vec![video(&format!("{}:{}", query.as_str(), page_token))],
        ))
    }
}

// ============================================================================
// Mock SettingsRepository
// ============================================================================

pub struct MockSettingsRepository {
    settings: RwLock<AppSettings>,
    should_fail: AtomicBool,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(AppSettings::default()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub async fn current(&self) -> AppSettings {
        self.settings.read().await.clone()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn get(&self) -> Result<AppSettings, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("disk unavailable".to_string()));
        }
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &AppSettings) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("disk unavailable".to_string()));
        }
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}

// ============================================================================
// Mock BlockedChannelRepository
// ============================================================================

pub struct MockBlockedChannelRepository {
    channels: RwLock<Vec<String>>,
    should_fail: AtomicBool,
}

impl MockBlockedChannelRepository {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("disk unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BlockedChannelRepository for MockBlockedChannelRepository {
    async fn get_all(&self) -> Result<Vec<String>, DomainError> {
        self.check()?;
        Ok(self.channels.read().await.clone())
    }

    async fn add(&self, name: &ChannelName) -> Result<bool, DomainError> {
        self.check()?;
        let mut channels = self.channels.write().await;
        if channels.iter().any(|c| c == name.as_str()) {
            return Ok(false);
        }
        channels.push(name.as_str().to_string());
        Ok(true)
    }

    async fn remove(&self, name: &str) -> Result<bool, DomainError> {
        self.check()?;
        let mut channels = self.channels.write().await;
        let before = channels.len();
        channels.retain(|c| c != name);
        Ok(channels.len() != before)
    }
}
