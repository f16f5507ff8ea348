use crate::ports::BlockedChannelRepository;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use tubegate_domain::{ChannelName, DomainError};

pub struct BlockChannelUseCase {
    repository: Arc<dyn BlockedChannelRepository>,
}

impl BlockChannelUseCase {
    pub fn new(repository: Arc<dyn BlockedChannelRepository>) -> Self {
        Self { repository }
    }

    /// Adds `raw_name` to the block list. Blocking an already blocked
    /// channel succeeds without creating a duplicate.
    #[instrument(skip(self))]
    pub async fn execute(&self, raw_name: Option<&str>) -> Result<bool, DomainError> {
        let name = ChannelName::parse(raw_name.unwrap_or_default())?;
        let added = self.repository.add(&name).await?;

        if added {
            info!(channel = %name, "Channel blocked");
        } else {
            debug!(channel = %name, "Channel already blocked");
        }

        Ok(added)
    }
}
