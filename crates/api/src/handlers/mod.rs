pub mod blocked_channels;
pub mod settings;
pub mod videos;

pub use blocked_channels::{block_channel, get_blocked_channels, unblock_channel};
pub use settings::{get_config, update_config};
pub use videos::{get_top50, search_videos};
