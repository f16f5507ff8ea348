use crate::services::{ClearedEntries, VideoCache};
use std::sync::Arc;
use tracing::{info, instrument};

/// Unconditionally empties the video cache.
pub struct ClearCacheUseCase {
    cache: Arc<VideoCache>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<VideoCache>) -> Self {
        Self { cache }
    }

    #[instrument(skip(self), name = "clear_cache")]
    pub async fn execute(&self) -> ClearedEntries {
        let cleared = self.cache.clear_all().await;

        info!(
            trending = cleared.trending,
            search = cleared.search,
            "Cache cleared"
        );

        cleared
    }
}
