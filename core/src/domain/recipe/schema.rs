use serde_json::json;

/// Returns the JSON schema for recipe generation LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipe_name": { "type": "string" },
            "ingredients_list": { "type": "string" },
            "instructions": { "type": "string" },
            "additional_tips": { "type": "string" }
        },
        "required": ["recipe_name", "ingredients_list", "instructions"]
    })
}
