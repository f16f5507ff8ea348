use crate::CacheJanitorJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_cache_janitor(CacheJanitorJob::new(clear_cache).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_janitor: Option<CacheJanitorJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_janitor: None,
        }
    }

    pub fn with_cache_janitor(mut self, job: CacheJanitorJob) -> Self {
        self.cache_janitor = Some(job);
        self
    }

    /// Start all registered background jobs.
    ///
    /// Returns one handle per spawned task so callers can wait for them to
    /// finish after cancelling their shutdown token.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");
        let mut handles = Vec::new();

        if let Some(job) = self.cache_janitor {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
