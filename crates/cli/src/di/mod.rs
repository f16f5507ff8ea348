pub mod repositories;
pub mod upstream;
pub mod use_cases;

pub use repositories::Repositories;
pub use upstream::build_upstream;
pub use use_cases::{build_app_state, UseCases};
