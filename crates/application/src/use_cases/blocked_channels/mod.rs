pub mod block;
pub mod get;
pub mod unblock;

pub use block::BlockChannelUseCase;
pub use get::GetBlockedChannelsUseCase;
pub use unblock::UnblockChannelUseCase;
