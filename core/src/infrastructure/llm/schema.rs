use serde_json::json;

/// Returns the JSON schema for ingredient safety LLM responses
pub fn get_ingredient_safety_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredient": { "type": "string" },
            "category": {
                "type": "string",
                "enum": ["SAFE", "MODERATE", "HARMFUL"]
            },
            "safety_score": {
                "type": "integer",
                "minimum": 0,
                "maximum": 100
            },
            "description": { "type": "string" },
            "sources": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "url": { "type": "string" }
                    },
                    "required": ["title"]
                }
            }
        },
        "required": ["ingredient", "description"]
    })
}

pub fn ingredient_safety_prompt(name: &str) -> String {
    format!(
        "You are a cosmetic chemist reviewing personal care ingredients. \
         Assess the safety of the cosmetic or hair care ingredient \"{name}\" for everyday \
         topical use. Classify it as SAFE, MODERATE or HARMFUL, give a safety score from 0 \
         (dangerous) to 100 (completely safe), explain the main concerns in one or two \
         sentences, and cite regulatory or scientific sources when you know them."
    )
}
