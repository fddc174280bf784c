use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredients::value_objects::{AnalyzeImageInput, DetectedIngredients},
};

/// Service trait for ingredient extraction
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<DetectedIngredients, CoreError>> + Send;
}
