use super::Repositories;
use std::sync::Arc;
use tubegate_api::middleware::{AppKey, RateLimiter};
use tubegate_api::{ApiGuards, AppState};
use tubegate_application::ports::UpstreamClient;
use tubegate_application::services::VideoCache;
use tubegate_application::use_cases::{
    BlockChannelUseCase, ClearCacheUseCase, GetBlockedChannelsUseCase, GetSettingsUseCase,
    GetTrendingUseCase, SearchVideosUseCase, UnblockChannelUseCase, UpdateSettingsUseCase,
};
use tubegate_domain::{Config, TrendingParams};

pub struct UseCases {
    pub get_trending: Arc<GetTrendingUseCase>,
    pub search_videos: Arc<SearchVideosUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub get_settings: Arc<GetSettingsUseCase>,
    pub update_settings: Arc<UpdateSettingsUseCase>,
    pub get_blocked_channels: Arc<GetBlockedChannelsUseCase>,
    pub block_channel: Arc<BlockChannelUseCase>,
    pub unblock_channel: Arc<UnblockChannelUseCase>,
}

impl UseCases {
    pub fn new(
        config: &Config,
        repos: &Repositories,
        upstream: Arc<dyn UpstreamClient>,
    ) -> Self {
        let cache = Arc::new(VideoCache::new(config.cache.freshness_window()));

        let trending_params = TrendingParams {
            region_code: config.upstream.trending_region.clone(),
            category_id: config.upstream.trending_category,
            max_results: config.upstream.trending_max_results,
        };

        Self {
            get_trending: Arc::new(
                GetTrendingUseCase::new(upstream.clone(), cache.clone())
                    .with_params(trending_params),
            ),
            search_videos: Arc::new(
                SearchVideosUseCase::new(upstream, cache.clone())
                    .with_max_results(config.upstream.search_max_results),
            ),
            clear_cache: Arc::new(ClearCacheUseCase::new(cache)),
            get_settings: Arc::new(GetSettingsUseCase::new(repos.settings.clone())),
            update_settings: Arc::new(UpdateSettingsUseCase::new(repos.settings.clone())),
            get_blocked_channels: Arc::new(GetBlockedChannelsUseCase::new(
                repos.blocked_channels.clone(),
            )),
            block_channel: Arc::new(BlockChannelUseCase::new(repos.blocked_channels.clone())),
            unblock_channel: Arc::new(UnblockChannelUseCase::new(
                repos.blocked_channels.clone(),
            )),
        }
    }
}

pub fn build_app_state(config: &Config, use_cases: &UseCases) -> AppState {
    AppState {
        get_trending: use_cases.get_trending.clone(),
        search_videos: use_cases.search_videos.clone(),
        get_settings: use_cases.get_settings.clone(),
        update_settings: use_cases.update_settings.clone(),
        get_blocked_channels: use_cases.get_blocked_channels.clone(),
        block_channel: use_cases.block_channel.clone(),
        unblock_channel: use_cases.unblock_channel.clone(),
        guards: ApiGuards {
            app_key: AppKey::new(&config.server.app_secret),
            global_limiter: Arc::new(RateLimiter::global(config.rate_limit.global)),
            search_limiter: Arc::new(RateLimiter::search(config.rate_limit.search)),
        },
    }
}
