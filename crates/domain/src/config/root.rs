use super::{
    CacheConfig, ConfigError, LoggingConfig, RateLimitConfig, ServerConfig, StorageConfig,
    UpstreamConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full runtime configuration.
///
/// Loaded from an optional TOML file, then overridden by command line flags
/// and environment variables. Secrets only ever come from the overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub app_secret: Option<String>,
    pub api_key: Option<String>,
    pub settings_file: Option<String>,
    pub blocked_channels_file: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(secret) = overrides.app_secret {
            self.server.app_secret = secret;
        }
        if let Some(key) = overrides.api_key {
            self.upstream.api_key = key;
        }
        if let Some(file) = overrides.settings_file {
            self.storage.settings_file = file;
        }
        if let Some(file) = overrides.blocked_channels_file {
            self.storage.blocked_channels_file = file;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.app_secret.is_empty() {
            return Err(ConfigError::Missing("APP_SECRET"));
        }
        if self.upstream.api_key.is_empty() {
            return Err(ConfigError::Missing("YOUTUBE_API_KEY"));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "upstream.timeout_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                field: "upstream.base_url",
                message: "must start with http:// or https://".to_string(),
            });
        }
        if self.cache.freshness_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.freshness_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.cache.janitor_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.janitor_interval_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        for (field, rule) in [
            ("rate_limit.global", &self.rate_limit.global),
            ("rate_limit.search", &self.rate_limit.search),
        ] {
            if rule.max_requests == 0 || rule.window_secs == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    message: "max_requests and window_secs must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}
