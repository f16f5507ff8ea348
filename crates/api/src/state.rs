use crate::middleware::{AppKey, RateLimiter};
use std::sync::Arc;
use tubegate_application::use_cases::{
    BlockChannelUseCase, GetBlockedChannelsUseCase, GetSettingsUseCase, GetTrendingUseCase,
    SearchVideosUseCase, UnblockChannelUseCase, UpdateSettingsUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub get_trending: Arc<GetTrendingUseCase>,
    pub search_videos: Arc<SearchVideosUseCase>,
    pub get_settings: Arc<GetSettingsUseCase>,
    pub update_settings: Arc<UpdateSettingsUseCase>,
    pub get_blocked_channels: Arc<GetBlockedChannelsUseCase>,
    pub block_channel: Arc<BlockChannelUseCase>,
    pub unblock_channel: Arc<UnblockChannelUseCase>,
    pub guards: ApiGuards,
}

/// Access control applied in front of every route.
#[derive(Clone)]
pub struct ApiGuards {
    pub app_key: AppKey,
    pub global_limiter: Arc<RateLimiter>,
    pub search_limiter: Arc<RateLimiter>,
}
