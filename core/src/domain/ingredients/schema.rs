use serde_json::json;

pub const ANALYZE_IMAGE_PROMPT: &str = "\
You are an expert in food recognition. You will be given an image of ingredients, \
and you will return a list of the ingredients.

Return the ingredients as a list of strings.";

/// Returns the JSON schema for ingredient detection LLM responses
pub fn get_ingredients_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["ingredients"]
    })
}
