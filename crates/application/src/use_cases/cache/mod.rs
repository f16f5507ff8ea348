pub mod clear;

pub use clear::ClearCacheUseCase;
