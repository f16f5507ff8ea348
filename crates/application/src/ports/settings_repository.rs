use async_trait::async_trait;
use tubegate_domain::{AppSettings, DomainError};

/// Storage for the single client configuration object.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<AppSettings, DomainError>;

    /// Replaces the stored object wholesale.
    async fn save(&self, settings: &AppSettings) -> Result<(), DomainError>;
}
