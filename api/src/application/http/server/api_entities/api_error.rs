use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use scrapchef_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Unprocessable entity: {0:?}")]
    UnProcessableEntity(Vec<ValidationError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    pub message: String,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            status: status.as_u16(),
            message,
            errors: None,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("Invalid request".to_string()),
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::DuplicateRecipe => ApiError::Conflict(error.to_string()),
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
            CoreError::ServiceUnavailable(message) => ApiError::ServiceUnavailable(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut validation_errors: Vec<ValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        validation_errors.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::UnProcessableEntity(validation_errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::InternalServerError(message) => {
                error!("internal server error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "E_INTERNAL_SERVER_ERROR",
                        message,
                    ),
                )
            }
            ApiError::UnProcessableEntity(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorResponse {
                    errors: Some(errors),
                    ..ApiErrorResponse::new(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "E_UNPROCESSABLE_ENTITY",
                        "Validation failed".to_string(),
                    )
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ApiErrorResponse::new(StatusCode::NOT_FOUND, "E_NOT_FOUND", message),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, "E_BAD_REQUEST", message),
            ),
            ApiError::Conflict(message) => (
                StatusCode::CONFLICT,
                ApiErrorResponse::new(StatusCode::CONFLICT, "E_CONFLICT", message),
            ),
            ApiError::BadGateway(message) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorResponse::new(StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY", message),
            ),
            ApiError::ServiceUnavailable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorResponse::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "E_SERVICE_UNAVAILABLE",
                    message,
                ),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}
