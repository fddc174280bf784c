use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Raw photo bytes with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: String, data: Vec<u8>) -> Result<Self, CoreError> {
        if !mime_type.starts_with("image/") {
            return Err(CoreError::InvalidInput(format!(
                "Unsupported image type: {}",
                mime_type
            )));
        }
        if data.is_empty() {
            return Err(CoreError::InvalidInput("Image is empty".to_string()));
        }
        if data.len() > MAX_IMAGE_SIZE {
            return Err(CoreError::InvalidInput(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }
        Ok(Self { mime_type, data })
    }

    /// Parses a `data:<mimetype>;base64,<encoded_data>` URI, the format camera
    /// captures and file previews are sent in.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let invalid = || {
            CoreError::InvalidInput(
                "Expected a data URI of the form data:<mimetype>;base64,<data>".to_string(),
            )
        };

        let rest = uri.trim().strip_prefix("data:").ok_or_else(invalid)?;
        let (header, encoded) = rest.split_once(',').ok_or_else(invalid)?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(invalid)?;

        let data = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| CoreError::InvalidInput(format!("Invalid base64 image data: {}", e)))?;

        Self::new(mime_type.to_ascii_lowercase(), data)
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image: ImagePayload,
    /// Ingredient text already entered; detected ingredients are appended.
    pub existing_ingredients: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetectedIngredients {
    pub ingredients: Vec<String>,
    /// The full ingredient text after merging the detected ingredients.
    pub ingredients_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_uri() {
        let payload = ImagePayload::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_from_data_uri_rejects_malformed_input() {
        for uri in [
            "image/png;base64,AAAA",
            "data:image/png,AAAA",
            "data:image/png;base64",
            "data:image/png;base64,!!!",
            "data:text/plain;base64,aGVsbG8=",
            "data:image/jpeg;base64,",
        ] {
            assert!(
                matches!(
                    ImagePayload::from_data_uri(uri),
                    Err(CoreError::InvalidInput(_))
                ),
                "{uri} should be rejected"
            );
        }
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let result = ImagePayload::new("image/jpeg".to_string(), vec![0; MAX_IMAGE_SIZE + 1]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
