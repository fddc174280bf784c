use chrono::{TimeZone, Utc};

use crate::domain::recipe_history::entities::SavedRecipe;
use crate::entity::saved_recipes::Model as SavedRecipeModel;

impl From<SavedRecipeModel> for SavedRecipe {
    fn from(model: SavedRecipeModel) -> Self {
        SavedRecipe {
            id: model.id,
            name: model.name,
            ingredients_list: model.ingredients_list,
            instructions: model.instructions,
            additional_tips: model.additional_tips,
            ingredients_input: model.ingredients_input,
            date_saved: model.date_saved,
            saved_at: Utc.from_utc_datetime(&model.saved_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_model_to_saved_recipe() {
        let saved_at = NaiveDate::from_ymd_opt(2025, 3, 9)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap();
        let id = Uuid::new_v4();

        let recipe = SavedRecipe::from(SavedRecipeModel {
            id,
            name: "Nasi Goreng".to_string(),
            ingredients_list: "- nasi".to_string(),
            instructions: "1. Goreng nasi".to_string(),
            additional_tips: None,
            ingredients_input: "nasi, telur".to_string(),
            date_saved: "2025-03-09".to_string(),
            saved_at,
        });

        assert_eq!(recipe.id, id);
        assert_eq!(recipe.saved_at.naive_utc(), saved_at);
        assert_eq!(recipe.ingredients_input, "nasi, telur");
    }
}
