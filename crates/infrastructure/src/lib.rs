pub mod repositories;
pub mod upstream;
