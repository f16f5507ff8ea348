use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single video resource exactly as the upstream API returned it.
///
/// Items are relayed to clients untouched, so the payload is kept as raw
/// JSON instead of being mapped onto a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoItem(pub Value);

impl VideoItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `id` field, when the upstream resource carries a plain string id.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn channel_title(&self) -> Option<&str> {
        self.0
            .get("snippet")
            .and_then(|s| s.get("channelTitle"))
            .and_then(Value::as_str)
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub next_page_token: Option<String>,
    pub items: Vec<VideoItem>,
}

impl SearchPage {
    pub fn new(next_page_token: Option<String>, items: Vec<VideoItem>) -> Self {
        Self {
            next_page_token,
            items,
        }
    }
}

/// Fixed parameters of the trending chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingParams {
    pub region_code: String,
    pub category_id: u32,
    pub max_results: u32,
}

impl Default for TrendingParams {
    fn default() -> Self {
        Self {
            region_code: "US".to_string(),
            category_id: 10,
            max_results: 50,
        }
    }
}

/// Where a pipeline result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchSource {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "youtube")]
    Upstream,
}

impl FetchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchSource::Cache => "cache",
            FetchSource::Upstream => "youtube",
        }
    }
}

impl fmt::Display for FetchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload tagged with its [`FetchSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub source: FetchSource,
    pub payload: T,
}

impl<T> Fetched<T> {
    pub fn from_cache(payload: T) -> Self {
        Self {
            source: FetchSource::Cache,
            payload,
        }
    }

    pub fn from_upstream(payload: T) -> Self {
        Self {
            source: FetchSource::Upstream,
            payload,
        }
    }
}
