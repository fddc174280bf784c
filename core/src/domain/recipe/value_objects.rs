#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    /// Comma separated list of the ingredients the user has.
    pub ingredients: String,
}
