//! Configuration module for Tubegate
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding and the shared client secret
//! - `upstream`: Video platform API endpoint, credential and timeout
//! - `cache`: Freshness window and janitor period
//! - `rate_limit`: Per-IP request limits
//! - `storage`: Locations of the JSON-backed resources
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod server;
pub mod storage;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rate_limit::{RateLimitConfig, RateLimitRule};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use upstream::UpstreamConfig;
