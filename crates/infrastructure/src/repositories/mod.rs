pub mod blocked_channel_repository;
mod json_file;
pub mod settings_repository;

pub use blocked_channel_repository::JsonFileBlockedChannelRepository;
pub use settings_repository::JsonFileSettingsRepository;
