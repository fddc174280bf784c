use axum::extract::{Path, State};
use scrapchef_core::domain::cooking_mode::{
    ports::CookingModeService, value_objects::NarrationCommand,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NarrationCommandsResponse {
    pub data: Vec<NarrationCommand>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/narration/commands",
    tag = "cooking-session",
    summary = "Take pending speech commands",
    description = "Returns the speak and cancel commands queued for the client speech engine, in order, and clears the queue.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = NarrationCommandsResponse),
        (status = 404, description = "No such open session")
    ),
)]
pub async fn drain_narration_commands(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<NarrationCommandsResponse>, ApiError> {
    let commands = state
        .service
        .drain_narration_commands(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NarrationCommandsResponse { data: commands }))
}
