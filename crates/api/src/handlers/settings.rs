use crate::{
    dto::{ErrorResponse, MessageResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, instrument};
use tubegate_domain::AppSettings;

type ApiError = (StatusCode, Json<ErrorResponse>);

#[instrument(skip(state), name = "api_get_config")]
pub async fn get_config(State(state): State<AppState>) -> Result<Json<AppSettings>, ApiError> {
    state.get_settings.execute().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to read config");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to read config")),
        )
    })
}

#[instrument(skip(state, settings), name = "api_update_config")]
pub async fn update_config(
    State(state): State<AppState>,
    Json(settings): Json<AppSettings>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.update_settings.execute(&settings).await {
        Ok(()) => Ok(Json(MessageResponse::new("Config updated successfully"))),
        Err(e) => {
            error!(error = %e, "Failed to save config");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to save config")),
            ))
        }
    }
}
