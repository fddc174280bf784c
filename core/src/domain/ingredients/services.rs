use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::LLMClient, services::Service},
    health::ports::HealthCheckRepository,
    ingredients::{
        helpers::{append_ingredients, join_ingredients},
        ports::IngredientService,
        schema::{ANALYZE_IMAGE_PROMPT, get_ingredients_schema},
        value_objects::{AnalyzeImageInput, DetectedIngredients},
    },
    recipe_history::ports::RecipeHistoryRepository,
};

#[derive(Debug, Deserialize)]
struct IngredientsResponse {
    ingredients: Vec<String>,
}

impl<RH, HC, LLM> IngredientService for Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(
        skip(self, input),
        fields(mime_type = %input.image.mime_type, size = input.image.data.len())
    )]
    async fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> Result<DetectedIngredients, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_image(
                ANALYZE_IMAGE_PROMPT.to_string(),
                input.image.data,
                input.image.mime_type,
                get_ingredients_schema(),
            )
            .await?;

        let parsed: IngredientsResponse = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Invalid ingredients format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid ingredients format: {}", e))
        })?;

        let ingredients: Vec<String> = parsed
            .ingredients
            .into_iter()
            .map(|ingredient| ingredient.trim().to_string())
            .filter(|ingredient| !ingredient.is_empty())
            .collect();

        info!(count = ingredients.len(), "ingredients detected");

        let ingredients_text = append_ingredients(
            input.existing_ingredients.as_deref().unwrap_or_default(),
            &join_ingredients(&ingredients),
        );

        Ok(DetectedIngredients {
            ingredients,
            ingredients_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::ports::MockLLMClient, health::ports::MockHealthCheckRepository,
        ingredients::value_objects::ImagePayload,
        recipe_history::ports::MockRecipeHistoryRepository,
    };

    type TestService =
        Service<MockRecipeHistoryRepository, MockHealthCheckRepository, MockLLMClient>;

    fn service(llm: MockLLMClient) -> TestService {
        Service::new(
            MockRecipeHistoryRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
            true,
        )
    }

    fn input(existing: Option<&str>) -> AnalyzeImageInput {
        AnalyzeImageInput {
            image: ImagePayload::new("image/png".to_string(), vec![1, 2, 3]).unwrap(),
            existing_ingredients: existing.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_detected_ingredients_are_appended_to_existing_text() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|_, data, mime_type, _| data == &vec![1, 2, 3] && mime_type == "image/png")
            .times(1)
            .returning(|_, _, _, _| {
                Box::pin(async {
                    Ok(r#"{"ingredients": ["tomat", " ", "bawang merah "]}"#.to_string())
                })
            });

        let detected = service(llm).analyze_image(input(Some("ayam"))).await.unwrap();

        assert_eq!(detected.ingredients, vec!["tomat", "bawang merah"]);
        assert_eq!(detected.ingredients_text, "ayam, tomat, bawang merah");
    }

    #[tokio::test]
    async fn test_llm_failure_is_propagated() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "LLM API returned error".to_string(),
                ))
            })
        });

        let result = service(llm).analyze_image(input(None)).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_response_without_ingredients_field_is_rejected() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _, _| Box::pin(async { Ok(r#"{"items": []}"#.to_string()) }));

        let result = service(llm).analyze_image(input(None)).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
