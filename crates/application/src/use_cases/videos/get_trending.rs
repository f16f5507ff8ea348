use crate::ports::UpstreamClient;
use crate::services::{CacheEntry, VideoCache};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument};
use tubegate_domain::{DomainError, Fetched, TrendingParams, VideoItem};

/// Serves the trending chart, going upstream only when the cached list is
/// missing or stale.
pub struct GetTrendingUseCase {
    upstream: Arc<dyn UpstreamClient>,
    cache: Arc<VideoCache>,
    params: TrendingParams,
}

impl GetTrendingUseCase {
    pub fn new(upstream: Arc<dyn UpstreamClient>, cache: Arc<VideoCache>) -> Self {
        Self {
            upstream,
            cache,
            params: TrendingParams::default(),
        }
    }

    pub fn with_params(mut self, params: TrendingParams) -> Self {
        self.params = params;
        self
    }

    #[instrument(skip(self), name = "get_trending")]
    pub async fn execute(&self) -> Result<Fetched<Arc<Vec<VideoItem>>>, DomainError> {
        if let Some(entry) = self.cache.fresh_trending().await {
            debug!(
                items = entry.payload().len(),
                age_secs = entry.age_at(Instant::now()).as_secs(),
                "Trending list served from cache"
            );
            return Ok(Fetched::from_cache(entry.shared()));
        }

        info!(
            region = %self.params.region_code,
            category = self.params.category_id,
            "Fetching trending list from upstream"
        );

        let items = self
            .upstream
            .fetch_trending(&self.params)
            .await
            .inspect_err(|e| error!(error = %e, "Trending fetch failed"))?;

        let entry = CacheEntry::new(items);
        let payload = entry.shared();
        self.cache.write_trending(entry).await;

        info!(items = payload.len(), "Trending list cached");
        Ok(Fetched::from_upstream(payload))
    }
}
