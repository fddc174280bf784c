use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    delete_saved_recipe::{__path_delete_saved_recipe, delete_saved_recipe},
    get_saved_recipe::{__path_get_saved_recipe, get_saved_recipe},
    get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_saved_recipes,
    save_recipe,
    clear_history,
    get_saved_recipe,
    delete_saved_recipe
))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_saved_recipes)
                .post(save_recipe)
                .delete(clear_history),
        )
        .route(
            &format!("{}/history/{{recipe_id}}", state.args.server.root_path),
            get(get_saved_recipe).delete(delete_saved_recipe),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::application::http::test::test_state;

    fn server() -> TestServer {
        let state = test_state(Arc::default());
        TestServer::new(history_routes(state.clone()).with_state(state)).unwrap()
    }

    #[tokio::test]
    async fn test_save_requires_a_recipe_name() {
        let response = server()
            .post("/history")
            .json(&json!({
                "recipe_name": "",
                "ingredients_list": "- ayam",
                "instructions": "1. Goreng",
                "ingredients_input": "ayam"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_invalid_recipe_id_is_a_client_error() {
        let response = server().get("/history/not-a-uuid").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
