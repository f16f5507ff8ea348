use serde::{Deserialize, Serialize};

/// Video platform API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the YouTube Data API (default: v3 public endpoint)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_region_code")]
    pub trending_region: String,

    /// Video category of the trending chart (default: 10, Music)
    #[serde(default = "default_category_id")]
    pub trending_category: u32,

    #[serde(default = "default_trending_max_results")]
    pub trending_max_results: u32,

    #[serde(default = "default_search_max_results")]
    pub search_max_results: u32,

    /// Process-wide API credential. Never read from the config file.
    #[serde(skip)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_region_code() -> String {
    "US".to_string()
}

fn default_category_id() -> u32 {
    10
}

fn default_trending_max_results() -> u32 {
    50
}

fn default_search_max_results() -> u32 {
    20
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            trending_region: default_region_code(),
            trending_category: default_category_id(),
            trending_max_results: default_trending_max_results(),
            search_max_results: default_search_max_results(),
            api_key: String::new(),
        }
    }
}
