pub mod api_key;
pub mod rate_limit;

pub use api_key::{require_app_key, timing_safe_eq, AppKey, APP_KEY_HEADER};
pub use rate_limit::{enforce_rate_limit, RateLimiter};

use axum::extract::{ConnectInfo, Request};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Bucket used when the peer address is unavailable.
pub const UNKNOWN_CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Peer IP of the connection that sent `req`.
pub fn client_ip(req: &Request) -> IpAddr {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(UNKNOWN_CLIENT)
}
