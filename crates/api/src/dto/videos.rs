use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tubegate_domain::{FetchSource, SearchPage, VideoItem};

#[derive(Serialize, Debug, Clone)]
pub struct Top50Response {
    pub source: FetchSource,
    pub data: Arc<Vec<VideoItem>>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Top50ErrorResponse {
    pub source: &'static str,
    pub error: &'static str,
}

impl Default for Top50ErrorResponse {
    fn default() -> Self {
        Self {
            source: "error",
            error: "YouTube API error",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchResponse {
    pub source: FetchSource,
    #[serde(rename = "nextPageToken", skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    pub data: Vec<VideoItem>,
}

impl SearchResponse {
    pub fn from_page(source: FetchSource, page: &SearchPage) -> Self {
        Self {
            source,
            next_page_token: page.next_page_token.clone(),
            data: page.items.clone(),
        }
    }
}
