use crate::ports::BlockedChannelRepository;
use std::sync::Arc;
use tubegate_domain::DomainError;

pub struct GetBlockedChannelsUseCase {
    repository: Arc<dyn BlockedChannelRepository>,
}

impl GetBlockedChannelsUseCase {
    pub fn new(repository: Arc<dyn BlockedChannelRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        self.repository.get_all().await
    }
}
