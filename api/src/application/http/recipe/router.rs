use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes/generate", state.args.server.root_path),
        post(generate_recipe),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::application::http::test::test_state;

    #[tokio::test]
    async fn test_blank_ingredients_are_rejected() {
        let state = test_state(Arc::default());
        let server = TestServer::new(recipe_routes(state.clone()).with_state(state)).unwrap();

        let response = server
            .post("/recipes/generate")
            .json(&json!({"ingredients": "   "}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Please enter or detect some ingredients first."
        );
    }
}
