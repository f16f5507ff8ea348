use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use tubegate_application::ports::UpstreamClient;
use tubegate_domain::{DomainError, SearchPage, SearchQuery, TrendingParams, VideoItem};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchListResponse {
    next_page_token: Option<String>,
    #[serde(default)]
    items: Vec<VideoItem>,
}

/// YouTube Data API v3 client.
///
/// Every call is bounded by `timeout`, covering connect, headers and body.
/// The API key travels as the `key` query parameter and is stripped from
/// any error text before it can reach the logs.
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl YouTubeClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::UpstreamFetch(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T, DomainError> {
        let url = format!("{}/{}", self.base_url, resource);

        let request = async {
            let response = self
                .http
                .get(&url)
                .query(params)
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await
                .map_err(|e| {
                    DomainError::UpstreamFetch(format!("request failed: {}", e.without_url()))
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(DomainError::UpstreamFetch(format!(
                    "{} returned HTTP {}: {}",
                    resource,
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )));
            }

            response.json::<T>().await.map_err(|e| {
                DomainError::UpstreamFetch(format!(
                    "invalid {} response: {}",
                    resource,
                    e.without_url()
                ))
            })
        };

        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| {
                DomainError::UpstreamFetch(format!(
                    "{} timed out after {}ms",
                    resource,
                    self.timeout.as_millis()
                ))
            })?
            .inspect_err(|e| warn!(resource, error = %e, "Upstream request failed"))
    }
}

#[async_trait]
impl UpstreamClient for YouTubeClient {
    #[instrument(skip(self))]
    async fn fetch_trending(
        &self,
        params: &TrendingParams,
    ) -> Result<Vec<VideoItem>, DomainError> {
        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,contentDetails,statistics".to_string()),
                    ("chart", "mostPopular".to_string()),
                    ("regionCode", params.region_code.clone()),
                    ("maxResults", params.max_results.to_string()),
                    ("videoCategoryId", params.category_id.to_string()),
                ],
            )
            .await?;

        debug!(items = response.items.len(), "Trending chart received");
        Ok(response.items)
    }

    #[instrument(skip(self, query), fields(query = %query))]
    async fn fetch_search(
        &self,
        query: &SearchQuery,
        page_token: &str,
        max_results: u32,
    ) -> Result<SearchPage, DomainError> {
        let response: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet".to_string()),
                    ("q", query.as_str().to_string()),
                    ("type", "video".to_string()),
                    ("maxResults", max_results.to_string()),
                    ("pageToken", page_token.to_string()),
                ],
            )
            .await?;

        debug!(
            items = response.items.len(),
            has_next = response.next_page_token.is_some(),
            "Search page received"
        );
        Ok(SearchPage::new(response.next_page_token, response.items))
    }
}
