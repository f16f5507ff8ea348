use async_trait::async_trait;
use tubegate_domain::{DomainError, SearchPage, SearchQuery, TrendingParams, VideoItem};

/// Read access to the external video platform.
///
/// Implementations issue exactly one request per call. Every failure
/// (network, timeout, non-2xx status, undecodable body) is reported as
/// `DomainError::UpstreamFetch`; callers do not distinguish between them.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch_trending(&self, params: &TrendingParams)
        -> Result<Vec<VideoItem>, DomainError>;

    async fn fetch_search(
        &self,
        query: &SearchQuery,
        page_token: &str,
        max_results: u32,
    ) -> Result<SearchPage, DomainError>;
}
