use axum::{Router, extract::State, routing::get};
use scrapchef_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub async fn health_live(State(state): State<AppState>) -> Result<Response<u64>, ApiError> {
    let response_time = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(response_time))
}

pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health/live"), get(health_live))
        .route(&format!("{root_path}/health/ready"), get(health_ready))
}
