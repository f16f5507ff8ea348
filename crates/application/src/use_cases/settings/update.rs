use crate::ports::SettingsRepository;
use std::sync::Arc;
use tracing::{info, instrument};
use tubegate_domain::{AppSettings, DomainError};

pub struct UpdateSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl UpdateSettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, settings))]
    pub async fn execute(&self, settings: &AppSettings) -> Result<(), DomainError> {
        self.repository.save(settings).await?;

        info!(
            enabled = settings.global.enabled,
            mode = %settings.global.mode,
            countries = settings.countries.len(),
            "Settings updated"
        );

        Ok(())
    }
}
