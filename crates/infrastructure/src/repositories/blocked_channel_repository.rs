use super::json_file;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::instrument;
use tubegate_application::ports::BlockedChannelRepository;
use tubegate_domain::{ChannelName, DomainError};

/// Blocked channel list stored as a JSON array of strings.
///
/// Read-modify-write cycles are serialized through `write_lock` so two
/// concurrent inserts cannot drop each other's update.
pub struct JsonFileBlockedChannelRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileBlockedChannelRepository {
    /// Opens the repository, creating an empty list when the file is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        json_file::ensure_file(&path, &Vec::<String>::new()).await?;

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }
}

#[async_trait]
impl BlockedChannelRepository for JsonFileBlockedChannelRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<String>, DomainError> {
        json_file::read(&self.path).await
    }

    #[instrument(skip(self))]
    async fn add(&self, name: &ChannelName) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut channels: Vec<String> = json_file::read(&self.path).await?;
        if channels.iter().any(|c| c == name.as_str()) {
            return Ok(false);
        }

        channels.push(name.as_str().to_string());
        json_file::write(&self.path, &channels).await?;
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn remove(&self, name: &str) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut channels: Vec<String> = json_file::read(&self.path).await?;
        let before = channels.len();
        channels.retain(|c| c != name);

        json_file::write(&self.path, &channels).await?;
        Ok(channels.len() != before)
    }
}
