use crate::ports::SettingsRepository;
use std::sync::Arc;
use tubegate_domain::{AppSettings, DomainError};

pub struct GetSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl GetSettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<AppSettings, DomainError> {
        self.repository.get().await
    }
}
