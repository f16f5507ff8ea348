#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tubegate_application::ports::{BlockedChannelRepository, SettingsRepository, UpstreamClient};
use tubegate_domain::{
    AppSettings, ChannelName, DomainError, SearchPage, SearchQuery, TrendingParams, VideoItem,
};

pub fn video(id: &str) -> VideoItem {
    VideoItem::new(json!({
        "kind": "youtube#video",
        "id": id,
        "snippet": { "title": format!("Video {id}"), "channelTitle": "Test Channel" }
    }))
}

// ============================================================================
// Mock UpstreamClient
// ============================================================================

pub struct MockUpstreamClient {
    trending: Arc<RwLock<Vec<VideoItem>>>,
    search_pages: Arc<RwLock<HashMap<(String, String), SearchPage>>>,
    trending_calls: Arc<AtomicU64>,
    search_calls: Arc<AtomicU64>,
    last_max_results: Arc<AtomicU32>,
    last_trending_params: Arc<RwLock<Option<TrendingParams>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self {
            trending: Arc::new(RwLock::new(vec![video("t1"), video("t2")])),
            search_pages: Arc::new(RwLock::new(HashMap::new())),
            trending_calls: Arc::new(AtomicU64::new(0)),
            search_calls: Arc::new(AtomicU64::new(0)),
            last_max_results: Arc::new(AtomicU32::new(0)),
            last_trending_params: Arc::new(RwLock::new(None)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::new()
        }
    }

    pub fn trending_calls(&self) -> u64 {
        self.trending_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> u64 {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn last_max_results(&self) -> u32 {
        self.last_max_results.load(Ordering::SeqCst)
    }

    pub async fn last_trending_params(&self) -> Option<TrendingParams> {
        self.last_trending_params.read().await.clone()
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn set_trending(&self, items: Vec<VideoItem>) {
        *self.trending.write().await = items;
    }

    pub async fn set_search_page(&self, query: &str, page_token: &str, page: SearchPage) {
        self.search_pages
            .write()
            .await
            .insert((query.to_string(), page_token.to_string()), page);
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn fetch_trending(
        &self,
        params: &TrendingParams,
    ) -> Result<Vec<VideoItem>, DomainError> {
        self.trending_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_trending_params.write().await = Some(params.clone());

        if *self.should_fail.read().await {
            return Err(DomainError::UpstreamFetch("HTTP 503".to_string()));
        }
        Ok(self.trending.read().await.clone())
    }

    async fn fetch_search(
        &self,
        query: &SearchQuery,
        page_token: &str,
        max_results: u32,
    ) -> Result<SearchPage, DomainError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.last_max_results.store(max_results, Ordering::SeqCst);

        if *self.should_fail.read().await {
            return Err(DomainError::UpstreamFetch("HTTP 403".to_string()));
        }

        let configured = self
            .search_pages
            .read()
            .await
            .get(&(query.as_str().to_string(), page_token.to_string()))
            .cloned();

        Ok(configured.unwrap_or_else(|| {
            SearchPage::new(
                Some(format!("next-{page_token}")),
                vec![video(&format!("{}:{}", query.as_str(), page_token))],
            )
        }))
    }
}

// ============================================================================
// Mock SettingsRepository
// ============================================================================

pub struct MockSettingsRepository {
    settings: Arc<RwLock<AppSettings>>,
    save_calls: Arc<AtomicU64>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: Arc::new(RwLock::new(AppSettings::default())),
            save_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn save_calls(&self) -> u64 {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn get(&self) -> Result<AppSettings, DomainError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &AppSettings) -> Result<(), DomainError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}

// ============================================================================
// Mock BlockedChannelRepository
// ============================================================================

pub struct MockBlockedChannelRepository {
    channels: Arc<RwLock<Vec<String>>>,
}

impl MockBlockedChannelRepository {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn with_channels(channels: Vec<&str>) -> Self {
        let repo = Self::new();
        *repo.channels.write().await = channels.into_iter().map(String::from).collect();
        repo
    }
}

#[async_trait]
impl BlockedChannelRepository for MockBlockedChannelRepository {
    async fn get_all(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.channels.read().await.clone())
    }

    async fn add(&self, name: &ChannelName) -> Result<bool, DomainError> {
        let mut channels = self.channels.write().await;
        if channels.iter().any(|c| c == name.as_str()) {
            return Ok(false);
        }
        channels.push(name.as_str().to_string());
        Ok(true)
    }

    async fn remove(&self, name: &str) -> Result<bool, DomainError> {
        let mut channels = self.channels.write().await;
        let before = channels.len();
        channels.retain(|c| c != name);
        Ok(channels.len() != before)
    }
}
