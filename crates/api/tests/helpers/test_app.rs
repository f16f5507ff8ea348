#![allow(dead_code)]

use super::mock_repositories::{
    MockBlockedChannelRepository, MockSettingsRepository, MockUpstreamClient,
};
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tower::ServiceExt;
use tubegate_api::middleware::{AppKey, RateLimiter, APP_KEY_HEADER};
use tubegate_api::{create_api_routes, ApiGuards, AppState};
use tubegate_application::services::VideoCache;
use tubegate_application::use_cases::{
    BlockChannelUseCase, GetBlockedChannelsUseCase, GetSettingsUseCase, GetTrendingUseCase,
    SearchVideosUseCase, UnblockChannelUseCase, UpdateSettingsUseCase,
};
use tubegate_domain::config::RateLimitRule;

pub const TEST_SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub upstream: Arc<MockUpstreamClient>,
    pub settings: Arc<MockSettingsRepository>,
    pub blocked: Arc<MockBlockedChannelRepository>,
    pub cache: Arc<VideoCache>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_limits(RateLimitRule::per_minute(120), RateLimitRule::per_minute(40))
    }

    pub fn with_limits(global: RateLimitRule, search: RateLimitRule) -> Self {
        let upstream = Arc::new(MockUpstreamClient::new());
        let settings = Arc::new(MockSettingsRepository::new());
        let blocked = Arc::new(MockBlockedChannelRepository::new());
        let cache = Arc::new(VideoCache::default());

        let state = AppState {
            get_trending: Arc::new(GetTrendingUseCase::new(upstream.clone(), cache.clone())),
            search_videos: Arc::new(SearchVideosUseCase::new(upstream.clone(), cache.clone())),
            get_settings: Arc::new(GetSettingsUseCase::new(settings.clone())),
            update_settings: Arc::new(UpdateSettingsUseCase::new(settings.clone())),
            get_blocked_channels: Arc::new(GetBlockedChannelsUseCase::new(blocked.clone())),
            block_channel: Arc::new(BlockChannelUseCase::new(blocked.clone())),
            unblock_channel: Arc::new(UnblockChannelUseCase::new(blocked.clone())),
            guards: ApiGuards {
                app_key: AppKey::new(TEST_SECRET),
                global_limiter: Arc::new(RateLimiter::global(global)),
                search_limiter: Arc::new(RateLimiter::search(search)),
            },
        };

        Self {
            router: create_api_routes(state),
            upstream,
            settings,
            blocked,
            cache,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(request("GET", uri).body(Body::empty()).unwrap())
            .await
    }
}

pub fn client(last_octet: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet))
}

/// Authorized request builder from the default test client.
pub fn request(method: &str, uri: &str) -> axum::http::request::Builder {
    request_from(client(1), method, uri).header(APP_KEY_HEADER, TEST_SECRET)
}

/// Request builder carrying only the peer address.
pub fn request_from(ip: IpAddr, method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(SocketAddr::new(ip, 40000)))
}

pub fn json_body(value: Value) -> Body {
    Body::from(serde_json::to_vec(&value).unwrap())
}
