use async_trait::async_trait;
use tubegate_domain::{ChannelName, DomainError};

/// Repository interface for the blocked channel list.
#[async_trait]
pub trait BlockedChannelRepository: Send + Sync {
    /// Returns every blocked channel in insertion order.
    async fn get_all(&self) -> Result<Vec<String>, DomainError>;

    /// Appends a channel unless it is already present.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The channel was added
    /// * `Ok(false)` - The channel was already blocked
    async fn add(&self, name: &ChannelName) -> Result<bool, DomainError>;

    /// Removes every occurrence of `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one entry was removed
    /// * `Ok(false)` - The channel was not blocked
    async fn remove(&self, name: &str) -> Result<bool, DomainError>;
}
