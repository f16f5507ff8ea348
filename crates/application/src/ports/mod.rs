pub mod blocked_channel_repository;
pub mod settings_repository;
pub mod upstream_client;

pub use blocked_channel_repository::BlockedChannelRepository;
pub use settings_repository::SettingsRepository;
pub use upstream_client::UpstreamClient;
