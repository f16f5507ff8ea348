use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_settings_file")]
    pub settings_file: String,

    #[serde(default = "default_blocked_channels_file")]
    pub blocked_channels_file: String,
}

fn default_settings_file() -> String {
    "config.json".to_string()
}

fn default_blocked_channels_file() -> String {
    "blockedChannels.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
            blocked_channels_file: default_blocked_channels_file(),
        }
    }
}
