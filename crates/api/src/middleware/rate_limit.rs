use super::client_ip;
use crate::dto::ErrorResponse;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, warn};
use tubegate_domain::config::RateLimitRule;

/// Expired windows are swept once every this many checks.
const PRUNE_EVERY: u64 = 256;

pub const GLOBAL_LIMIT_MESSAGE: &str = "Too many requests, please try again later.";
pub const SEARCH_LIMIT_MESSAGE: &str = "Too many search requests. Try again in 1 minute.";

struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client IP.
pub struct RateLimiter {
    name: &'static str,
    rule: RateLimitRule,
    message: &'static str,
    windows: DashMap<IpAddr, Window>,
    checks: AtomicU64,
}

impl RateLimiter {
    pub fn new(name: &'static str, rule: RateLimitRule, message: &'static str) -> Self {
        Self {
            name,
            rule,
            message,
            windows: DashMap::new(),
            checks: AtomicU64::new(0),
        }
    }

    pub fn global(rule: RateLimitRule) -> Self {
        Self::new("global", rule, GLOBAL_LIMIT_MESSAGE)
    }

    pub fn search(rule: RateLimitRule) -> Self {
        Self::new("search", rule, SEARCH_LIMIT_MESSAGE)
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Counts one request from `client`; returns `false` once the client
    /// has exceeded the limit for the current window.
    pub fn check(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let window = self.rule.window();

        if self.checks.fetch_add(1, Ordering::Relaxed) % PRUNE_EVERY == PRUNE_EVERY - 1 {
            self.prune(now);
        }

        let mut entry = self.windows.entry(client).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.saturating_duration_since(entry.started) >= window {
            entry.started = now;
            entry.count = 0;
        }

        entry.count = entry.count.saturating_add(1);
        entry.count <= self.rule.max_requests
    }

    /// Drops windows that have already elapsed. Returns how many were removed.
    pub fn prune(&self, now: Instant) -> usize {
        let window = self.rule.window();
        let before = self.windows.len();
        self.windows
            .retain(|_, w| now.saturating_duration_since(w.started) < window);
        let removed = before.saturating_sub(self.windows.len());
        if removed > 0 {
            debug!(limiter = self.name, removed, "Pruned rate limit windows");
        }
        removed
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

pub async fn enforce_rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_ip(&req);

    if !limiter.check(client) {
        warn!(limiter = limiter.name, client = %client, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(limiter.message())),
        )
            .into_response();
    }

    next.run(req).await
}
