use crate::ports::BlockedChannelRepository;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use tubegate_domain::DomainError;

pub struct UnblockChannelUseCase {
    repository: Arc<dyn BlockedChannelRepository>,
}

impl UnblockChannelUseCase {
    pub fn new(repository: Arc<dyn BlockedChannelRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<bool, DomainError> {
        let removed = self.repository.remove(name).await?;

        if removed {
            info!(channel = %name, "Channel unblocked");
        } else {
            debug!(channel = %name, "Channel was not blocked");
        }

        Ok(removed)
    }
}
