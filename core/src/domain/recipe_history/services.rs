use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::LLMClient, services::Service},
    health::ports::HealthCheckRepository,
    recipe_history::{
        entities::SavedRecipe,
        ports::{RecipeHistoryRepository, RecipeHistoryService},
        value_objects::{GetSavedRecipesFilter, SaveRecipeInput},
    },
};

impl<RH, HC, LLM> RecipeHistoryService for Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_saved_recipes(
        &self,
        filter: GetSavedRecipesFilter,
    ) -> Result<Vec<SavedRecipe>, CoreError> {
        self.recipe_history_repository.list(filter).await
    }

    async fn get_saved_recipe(&self, recipe_id: Uuid) -> Result<SavedRecipe, CoreError> {
        self.recipe_history_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(recipe_name = %input.recipe.recipe_name))]
    async fn save_recipe(&self, input: SaveRecipeInput) -> Result<SavedRecipe, CoreError> {
        let name = input.recipe.recipe_name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("Recipe name is required".to_string()));
        }

        let existing = self
            .recipe_history_repository
            .find_by_name_and_input(name.clone(), input.ingredients_input.clone())
            .await?;
        if let Some(existing) = existing {
            info!(recipe_id = %existing.id, "recipe already in history");
            return Err(CoreError::DuplicateRecipe);
        }

        let mut recipe = input.recipe;
        recipe.recipe_name = name;
        let saved = self
            .recipe_history_repository
            .create(SavedRecipe::new(recipe, input.ingredients_input))
            .await?;

        info!(recipe_id = %saved.id, "recipe saved to history");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete_saved_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        if !self.recipe_history_repository.delete(recipe_id).await? {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<u64, CoreError> {
        let deleted = self.recipe_history_repository.clear().await?;
        info!(deleted, "recipe history cleared");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::ports::MockLLMClient, health::ports::MockHealthCheckRepository,
        recipe::entities::Recipe, recipe_history::ports::MockRecipeHistoryRepository,
    };

    type TestService =
        Service<MockRecipeHistoryRepository, MockHealthCheckRepository, MockLLMClient>;

    fn service(repository: MockRecipeHistoryRepository) -> TestService {
        Service::new(
            repository,
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
            true,
        )
    }

    fn ayam_goreng() -> Recipe {
        Recipe {
            recipe_name: "Ayam Goreng".to_string(),
            ingredients_list: "- ayam\n- kecap".to_string(),
            instructions: "1. Goreng ayam\n2. Sajikan".to_string(),
            additional_tips: None,
        }
    }

    /// Repository double backed by a shared vector, newest first.
    fn in_memory_repository(store: Arc<Mutex<Vec<SavedRecipe>>>) -> MockRecipeHistoryRepository {
        let mut repository = MockRecipeHistoryRepository::new();

        let lookup = Arc::clone(&store);
        repository
            .expect_find_by_name_and_input()
            .returning(move |name, input| {
                let found = lookup
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|r| r.name == name && r.ingredients_input == input)
                    .cloned();
                Box::pin(async move { Ok(found) })
            });

        let insert = Arc::clone(&store);
        repository.expect_create().returning(move |recipe| {
            insert.lock().unwrap().insert(0, recipe.clone());
            Box::pin(async move { Ok(recipe) })
        });

        repository
    }

    #[tokio::test]
    async fn test_saving_same_recipe_twice_keeps_one_entry() {
        let store = Arc::new(Mutex::new(Vec::new()));
        let service = service(in_memory_repository(Arc::clone(&store)));
        let input = SaveRecipeInput {
            recipe: ayam_goreng(),
            ingredients_input: "ayam, kecap".to_string(),
        };

        let first = service.save_recipe(input.clone()).await.unwrap();
        let second = service.save_recipe(input).await;

        assert_eq!(second.unwrap_err(), CoreError::DuplicateRecipe);
        let stored = store.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], first);
    }

    #[tokio::test]
    async fn test_same_name_with_other_ingredients_is_a_new_entry() {
        let store = Arc::new(Mutex::new(Vec::new()));
        let service = service(in_memory_repository(Arc::clone(&store)));

        service
            .save_recipe(SaveRecipeInput {
                recipe: ayam_goreng(),
                ingredients_input: "ayam, kecap".to_string(),
            })
            .await
            .unwrap();
        let latest = service
            .save_recipe(SaveRecipeInput {
                recipe: ayam_goreng(),
                ingredients_input: "ayam, kecap, cabai".to_string(),
            })
            .await
            .unwrap();

        let stored = store.lock().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, latest.id);
    }

    #[tokio::test]
    async fn test_save_records_input_and_date() {
        let store = Arc::new(Mutex::new(Vec::new()));
        let service = service(in_memory_repository(store));

        let saved = service
            .save_recipe(SaveRecipeInput {
                recipe: ayam_goreng(),
                ingredients_input: "ayam, kecap".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(saved.name, "Ayam Goreng");
        assert_eq!(saved.ingredients_input, "ayam, kecap");
        assert_eq!(saved.date_saved, saved.saved_at.format("%Y-%m-%d").to_string());
        assert_eq!(saved.recipe(), ayam_goreng());
    }

    #[tokio::test]
    async fn test_nameless_recipe_is_not_saved() {
        let mut repository = MockRecipeHistoryRepository::new();
        repository.expect_find_by_name_and_input().never();
        repository.expect_create().never();

        let mut recipe = ayam_goreng();
        recipe.recipe_name = "  ".to_string();
        let result = service(repository)
            .save_recipe(SaveRecipeInput {
                recipe,
                ingredients_input: "ayam".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_deleting_unknown_recipe_is_not_found() {
        let id = Uuid::new_v4();
        let mut repository = MockRecipeHistoryRepository::new();
        repository
            .expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Box::pin(async { Ok(false) }));

        let result = service(repository).delete_saved_recipe(id).await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_get_missing_recipe_is_not_found() {
        let mut repository = MockRecipeHistoryRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(repository).get_saved_recipe(Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
