use axum::{Router, extract::DefaultBodyLimit, routing::post};
use scrapchef_core::domain::ingredients::value_objects::MAX_IMAGE_SIZE;
use utoipa::OpenApi;

use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_image_uri::{__path_analyze_image_uri, analyze_image_uri},
    append_dictation::{__path_append_dictation, append_dictation},
};
use crate::application::http::server::app_state::AppState;

// Room for a base64 encoded image at the size cap plus form overhead.
const BODY_LIMIT: usize = MAX_IMAGE_SIZE * 3 / 2;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, analyze_image_uri, append_dictation))]
pub struct IngredientsApiDoc;

pub fn ingredients_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/ingredients/analyze", root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/ingredients/analyze-uri", root_path),
            post(analyze_image_uri),
        )
        .route(
            &format!("{}/ingredients/dictation", root_path),
            post(append_dictation),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
