use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tubegate_application::services::ClearedEntries;
use tubegate_application::use_cases::ClearCacheUseCase;

/// Wipes the whole video cache on a fixed period, regardless of entry age.
///
/// The first sweep happens one full period after `start`, never at startup.
pub struct CacheJanitorJob {
    clear: Arc<ClearCacheUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheJanitorJob {
    pub fn new(clear: Arc<ClearCacheUseCase>) -> Self {
        Self {
            clear,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Performs a single sweep immediately.
    pub async fn run_once(&self) -> ClearedEntries {
        let cleared = self.clear.execute().await;
        if cleared.total() == 0 {
            debug!("Cache janitor: nothing to clear");
        }
        cleared
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        let period = self.interval();
        info!(interval_secs = self.interval_secs, "Starting cache janitor job");

        tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheJanitorJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once().await;
                    }
                }
            }
        })
    }
}
