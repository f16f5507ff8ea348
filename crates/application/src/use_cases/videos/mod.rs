pub mod get_trending;
pub mod search;

pub use get_trending::GetTrendingUseCase;
pub use search::{SearchVideosUseCase, DEFAULT_SEARCH_MAX_RESULTS};
