use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM Client trait for calling AI models.
///
/// Both calls constrain the model to JSON output matching `response_schema`
/// and return the raw JSON text, which callers deserialize into typed values.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
