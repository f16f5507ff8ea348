use super::json_file;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::instrument;
use tubegate_application::ports::SettingsRepository;
use tubegate_domain::{AppSettings, DomainError};

/// Keeps the client configuration object in a pretty-printed JSON file.
pub struct JsonFileSettingsRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSettingsRepository {
    /// Opens the repository, creating the file with default settings when
    /// it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        json_file::ensure_file(&path, &AppSettings::default()).await?;

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }
}

#[async_trait]
impl SettingsRepository for JsonFileSettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self) -> Result<AppSettings, DomainError> {
        json_file::read(&self.path).await
    }

    #[instrument(skip(self, settings))]
    async fn save(&self, settings: &AppSettings) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        json_file::write(&self.path, settings).await
    }
}
