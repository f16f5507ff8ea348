pub mod youtube_client;

pub use youtube_client::{YouTubeClient, DEFAULT_BASE_URL};
