use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response cache settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum age of a cached response in seconds (default: 3600)
    #[serde(default = "default_one_hour")]
    pub freshness_secs: u64,

    /// Period of the full cache wipe in seconds (default: 3600)
    #[serde(default = "default_one_hour")]
    pub janitor_interval_secs: u64,
}

fn default_one_hour() -> u64 {
    3600
}

impl CacheConfig {
    pub fn freshness_window(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_secs: default_one_hour(),
            janitor_interval_secs: default_one_hour(),
        }
    }
}
