use super::client_ip;
use crate::dto::ErrorResponse;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::warn;

pub const APP_KEY_HEADER: &str = "x-app-key";

/// The shared secret clients present in the `x-app-key` header.
#[derive(Clone)]
pub struct AppKey(Arc<str>);

impl AppKey {
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self(Arc::from(secret.as_ref()))
    }

    pub fn matches(&self, presented: &[u8]) -> bool {
        timing_safe_eq(self.0.as_bytes(), presented)
    }
}

/// Compares two byte strings in time independent of where they differ.
pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Rejects requests without the correct `x-app-key` header with
/// `403 {"error":"Forbidden"}`.
pub async fn require_app_key(State(key): State<AppKey>, req: Request, next: Next) -> Response {
    let authorized = req
        .headers()
        .get(APP_KEY_HEADER)
        .is_some_and(|value| key.matches(value.as_bytes()));

    if !authorized {
        warn!(
            client = %client_ip(&req),
            path = %req.uri().path(),
            "Unauthorized access attempt"
        );
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("Forbidden")),
        )
            .into_response();
    }

    next.run(req).await
}
