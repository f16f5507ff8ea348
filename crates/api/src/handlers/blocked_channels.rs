use crate::{
    dto::{BlockChannelRequest, ErrorResponse, MessageResponse},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, instrument};
use tubegate_domain::DomainError;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
}

#[instrument(skip(state), name = "api_get_blocked_channels")]
pub async fn get_blocked_channels(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    match state.get_blocked_channels.execute().await {
        Ok(channels) => {
            debug!(count = channels.len(), "Blocked channels retrieved");
            Ok(Json(channels))
        }
        Err(e) => {
            error!(error = %e, "Failed to read blocked channels");
            Err(internal("Failed to read blocked channels"))
        }
    }
}

/// The body is parsed leniently: a missing or malformed body is treated
/// like one without `channelName`.
#[instrument(skip(state, body), name = "api_block_channel")]
pub async fn block_channel(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let request: BlockChannelRequest = serde_json::from_slice(&body).unwrap_or_default();

    match state
        .block_channel
        .execute(request.channel_name.as_deref())
        .await
    {
        Ok(_) => Ok(Json(MessageResponse::new("Channel blocked"))),
        Err(DomainError::InvalidChannelName(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Channel name required")),
        )),
        Err(e) => {
            error!(error = %e, "Failed to block channel");
            Err(internal("Failed to block channel"))
        }
    }
}

#[instrument(skip(state), name = "api_unblock_channel")]
pub async fn unblock_channel(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.unblock_channel.execute(&name).await {
        Ok(_) => Ok(Json(MessageResponse::new("Channel unblocked"))),
        Err(e) => {
            error!(error = %e, "Failed to unblock channel");
            Err(internal("Failed to unblock channel"))
        }
    }
}
