pub mod blocked_channels;
pub mod common;
pub mod videos;

pub use blocked_channels::BlockChannelRequest;
pub use common::{ErrorResponse, MessageResponse};
pub use videos::{SearchParams, SearchResponse, Top50ErrorResponse, Top50Response};
