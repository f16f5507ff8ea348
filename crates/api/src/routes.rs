use crate::handlers;
use crate::middleware::{enforce_rate_limit, require_app_key};
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};

/// Creates all API routes with state.
///
/// Layers run outermost first: global rate limit, then the `x-app-key`
/// check, then the search-only rate limit on `/search`.
pub fn create_api_routes(state: AppState) -> Router {
    let guards = state.guards.clone();

    let search = Router::new()
        .route("/search", get(handlers::search_videos))
        .route_layer(from_fn_with_state(
            guards.search_limiter.clone(),
            enforce_rate_limit,
        ));

    Router::new()
        .route("/top50", get(handlers::get_top50))
        .route(
            "/config",
            get(handlers::get_config).post(handlers::update_config),
        )
        .route(
            "/blocked-channels",
            get(handlers::get_blocked_channels).post(handlers::block_channel),
        )
        .route("/blocked-channels/{name}", delete(handlers::unblock_channel))
        .merge(search)
        .layer(from_fn_with_state(guards.app_key.clone(), require_app_key))
        .layer(from_fn_with_state(
            guards.global_limiter.clone(),
            enforce_rate_limit,
        ))
        .with_state(state)
}
