use crate::ports::UpstreamClient;
use crate::services::{CacheEntry, VideoCache};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tubegate_domain::{DomainError, Fetched, SearchCacheKey, SearchPage, SearchQuery};

pub const DEFAULT_SEARCH_MAX_RESULTS: u32 = 20;

/// Serves one page of search results per `(query, page token)` pair.
///
/// Concurrent misses on the same key are not coalesced: each one calls
/// upstream and the last successful write wins.
pub struct SearchVideosUseCase {
    upstream: Arc<dyn UpstreamClient>,
    cache: Arc<VideoCache>,
    max_results: u32,
}

impl SearchVideosUseCase {
    pub fn new(upstream: Arc<dyn UpstreamClient>, cache: Arc<VideoCache>) -> Self {
        Self {
            upstream,
            cache,
            max_results: DEFAULT_SEARCH_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// # Errors
    ///
    /// * `DomainError::InvalidQuery` - Query missing, blank or too long
    /// * `DomainError::UpstreamFetch` - Cache miss and the upstream call failed
    #[instrument(skip(self), name = "search_videos")]
    pub async fn execute(
        &self,
        raw_query: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<Fetched<Arc<SearchPage>>, DomainError> {
        let query = SearchQuery::parse(raw_query.unwrap_or_default())?;
        let page_token = page_token.unwrap_or_default();
        let key = SearchCacheKey::new(&query, page_token);

        if let Some(entry) = self.cache.fresh_search(&key).await {
            debug!(query = %query, page_token, "Search page served from cache");
            return Ok(Fetched::from_cache(entry.shared()));
        }

        info!(query = %query, page_token, "Fetching search page from upstream");

        let page = self
            .upstream
            .fetch_search(&query, page_token, self.max_results)
            .await
            .inspect_err(|e| error!(query = %query, error = %e, "Search fetch failed"))?;

        let entry = CacheEntry::new(page);
        let payload = entry.shared();
        self.cache.write_search(key, entry).await;

        Ok(Fetched::from_upstream(payload))
    }
}
