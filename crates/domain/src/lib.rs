//! Tubegate Domain Layer
pub mod blocked_channel;
pub mod config;
pub mod errors;
pub mod search_query;
pub mod settings;
pub mod video;

pub use blocked_channel::ChannelName;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DomainError, QueryError};
pub use search_query::{SearchCacheKey, SearchQuery, MAX_QUERY_CHARS};
pub use settings::{AppSettings, GlobalSettings};
pub use video::{FetchSource, Fetched, SearchPage, TrendingParams, VideoItem};
