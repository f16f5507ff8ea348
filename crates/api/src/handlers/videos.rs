use crate::{
    dto::{ErrorResponse, SearchParams, SearchResponse, Top50ErrorResponse, Top50Response},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, instrument};
use tubegate_domain::{DomainError, QueryError};

#[instrument(skip(state), name = "api_get_top50")]
pub async fn get_top50(State(state): State<AppState>) -> Response {
    match state.get_trending.execute().await {
        Ok(fetched) => {
            debug!(
                source = %fetched.source,
                items = fetched.payload.len(),
                "Top50 served"
            );
            Json(Top50Response {
                source: fetched.source,
                data: fetched.payload,
            })
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "YouTube API error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Top50ErrorResponse::default()),
            )
                .into_response()
        }
    }
}

#[instrument(skip(state), name = "api_search_videos")]
pub async fn search_videos(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .search_videos
        .execute(params.q.as_deref(), params.page_token.as_deref())
        .await
    {
        Ok(fetched) => {
            debug!(
                source = %fetched.source,
                items = fetched.payload.items.len(),
                "Search page served"
            );
            Ok(Json(SearchResponse::from_page(
                fetched.source,
                &fetched.payload,
            )))
        }
        Err(DomainError::InvalidQuery(QueryError::Empty)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Query required")),
        )),
        Err(DomainError::InvalidQuery(QueryError::TooLong { .. })) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Query too long")),
        )),
        Err(e) => {
            error!(error = %e, "Search failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Search failed")),
            ))
        }
    }
}
