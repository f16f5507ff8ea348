use std::sync::Arc;
use tracing::info;
use tubegate_application::ports::{BlockedChannelRepository, SettingsRepository};
use tubegate_domain::Config;
use tubegate_infrastructure::repositories::{
    JsonFileBlockedChannelRepository, JsonFileSettingsRepository,
};

pub struct Repositories {
    pub settings: Arc<dyn SettingsRepository>,
    pub blocked_channels: Arc<dyn BlockedChannelRepository>,
}

impl Repositories {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = JsonFileSettingsRepository::open(&config.storage.settings_file).await?;
        let blocked =
            JsonFileBlockedChannelRepository::open(&config.storage.blocked_channels_file).await?;

        info!(
            settings_file = %config.storage.settings_file,
            blocked_channels_file = %config.storage.blocked_channels_file,
            "Storage files ready"
        );

        Ok(Self {
            settings: Arc::new(settings),
            blocked_channels: Arc::new(blocked),
        })
    }
}
