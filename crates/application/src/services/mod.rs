pub mod video_cache;

pub use video_cache::{CacheEntry, CacheStats, ClearedEntries, VideoCache};
