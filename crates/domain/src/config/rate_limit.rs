use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A fixed-window limit: at most `max_requests` per `window_secs` per client IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateLimitRule {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl RateLimitRule {
    pub fn per_minute(max_requests: u32) -> Self {
        Self {
            max_requests,
            window_secs: 60,
        }
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Applies to every route (default: 120/min)
    #[serde(default = "default_global")]
    pub global: RateLimitRule,

    /// Applies to `/search` on top of the global rule (default: 40/min)
    #[serde(default = "default_search")]
    pub search: RateLimitRule,
}

fn default_global() -> RateLimitRule {
    RateLimitRule::per_minute(120)
}

fn default_search() -> RateLimitRule {
    RateLimitRule::per_minute(40)
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global: default_global(),
            search: default_search(),
        }
    }
}
