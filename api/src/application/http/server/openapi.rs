use utoipa::OpenApi;

use crate::application::http::{
    cooking_session::router::CookingSessionApiDoc, history::router::HistoryApiDoc,
    ingredients::router::IngredientsApiDoc, recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ScrapChef API",
        description = "Turn leftover ingredients into recipes and cook them step by step."
    ),
    nest(
        (path = "/ingredients", api = IngredientsApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/cooking-sessions", api = CookingSessionApiDoc),
    )
)]
pub struct ApiDoc;
