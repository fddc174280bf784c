use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

/// Public runtime settings. Secrets are never included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Config {
    pub app_version: String,
    pub root_path: String,
    pub gemini_model: String,
    pub narration_enabled: bool,
    pub metrics_enabled: bool,
}

pub async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(Config {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        gemini_model: state.args.llm.gemini_model.clone(),
        narration_enabled: state.args.cooking_mode.narration_enabled,
        metrics_enabled: state.args.server.metrics,
    })
}
