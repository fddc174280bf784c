use tracing::info;

use crate::{
    domain::common::{ScrapchefConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        llm::gemini_client::GeminiLLMClient,
        recipe_history::repositories::saved_recipe_repository::PostgresRecipeHistoryRepository,
    },
};

pub type ScrapchefService =
    Service<PostgresRecipeHistoryRepository, PostgresHealthCheckRepository, GeminiLLMClient>;

/// Wires the Postgres and Gemini adapters into the domain service.
pub async fn create_service(config: ScrapchefConfig) -> Result<ScrapchefService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!(
            "GEMINI_API_KEY is empty, ingredient detection and recipe generation will fail"
        );
    }

    info!(
        model = %config.llm.gemini_model,
        narration_enabled = config.cooking_mode.narration_enabled,
        "service ready"
    );

    Ok(Service::new(
        PostgresRecipeHistoryRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model),
        config.cooking_mode.narration_enabled,
    ))
}
