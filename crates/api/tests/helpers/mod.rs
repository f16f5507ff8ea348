pub mod mock_repositories;
pub mod test_app;

pub use mock_repositories::*;
pub use test_app::*;
