use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone)]
pub struct SaveRecipeInput {
    pub recipe: Recipe,
    pub ingredients_input: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetSavedRecipesFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
