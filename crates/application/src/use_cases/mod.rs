pub mod blocked_channels;
pub mod cache;
pub mod settings;
pub mod videos;

// Re-export use cases
pub use blocked_channels::{BlockChannelUseCase, GetBlockedChannelsUseCase, UnblockChannelUseCase};
pub use cache::ClearCacheUseCase;
pub use settings::{GetSettingsUseCase, UpdateSettingsUseCase};
pub use videos::{GetTrendingUseCase, SearchVideosUseCase};
