use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    ingredient::{
        entities::{Citation, IngredientFinding, SafetyCategory},
        ports::LiveIngredientLookup,
    },
};

use super::schema::{get_ingredient_safety_schema, ingredient_safety_prompt};

/// Live ingredient lookup backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiIngredientClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

/// Structured answer the model is asked to produce.
#[derive(Debug, Deserialize)]
struct IngredientPayload {
    ingredient: Option<String>,
    category: Option<String>,
    safety_score: Option<f64>,
    description: Option<String>,
    #[serde(default)]
    sources: Vec<SourcePayload>,
}

#[derive(Debug, Deserialize)]
struct SourcePayload {
    title: String,
    url: Option<String>,
}

fn parse_category(raw: &str) -> Option<SafetyCategory> {
    match raw.trim().to_uppercase().as_str() {
        "SAFE" => Some(SafetyCategory::Safe),
        "MODERATE" | "CAUTION" => Some(SafetyCategory::Moderate),
        "HARMFUL" | "UNSAFE" => Some(SafetyCategory::Harmful),
        _ => None,
    }
}

/// Adapts the model's JSON answer into an ingredient finding.
pub(crate) fn finding_from_response(name: &str, raw: &str) -> Result<IngredientFinding, CoreError> {
    let payload: IngredientPayload = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Failed to parse LLM ingredient payload: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })?;

    Ok(IngredientFinding {
        ingredient: payload
            .ingredient
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| name.to_string()),
        category: payload.category.as_deref().and_then(parse_category),
        safety_score: payload
            .safety_score
            .filter(|s| s.is_finite())
            .map(|s| s.round() as i32),
        description: payload.description,
        sources: payload
            .sources
            .into_iter()
            .filter(|s| !s.title.trim().is_empty())
            .map(|s| Citation::new(s.title, s.url.filter(|u| !u.is_empty())))
            .collect(),
    })
}

impl GeminiIngredientClient {
    pub fn new(config: &LLMConfig, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "LLM API key is not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LiveIngredientLookup for GeminiIngredientClient {
    async fn lookup(&self, name: String) -> Result<IngredientFinding, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: ingredient_safety_prompt(&name),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: get_ingredient_safety_schema(),
            }),
        };

        let raw_response = self.call_gemini_api(request).await?;
        finding_from_response(&name, &raw_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_from_complete_response() {
        let raw = r#"{
            "ingredient": "Sodium Lauryl Sulfate",
            "category": "harmful",
            "safety_score": 21.6,
            "description": "Harsh surfactant that strips natural oils.",
            "sources": [
                { "title": "CIR Final Report", "url": "https://cir-safety.org" },
                { "title": "" }
            ]
        }"#;

        let finding = finding_from_response("sls", raw).unwrap();
        assert_eq!(finding.ingredient, "Sodium Lauryl Sulfate");
        assert_eq!(finding.category, Some(SafetyCategory::Harmful));
        assert_eq!(finding.safety_score, Some(22));
        assert_eq!(finding.sources.len(), 1);
        assert_eq!(
            finding.sources[0].url.as_deref(),
            Some("https://cir-safety.org")
        );
    }

    #[test]
    fn test_finding_with_unknown_category() {
        let raw = r#"{ "category": "mostly fine", "safety_score": 72, "description": "ok" }"#;

        let finding = finding_from_response("Glycerin", raw).unwrap();
        assert_eq!(finding.ingredient, "Glycerin");
        assert_eq!(finding.category, None);
        assert_eq!(finding.safety_score, Some(72));
    }

    #[test]
    fn test_malformed_response_is_an_error() {
        let err = finding_from_response("Glycerin", "not json").unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let client = GeminiIngredientClient::new(
            &LLMConfig {
                gemini_api_key: String::new(),
                gemini_model: "gemini-2.0-flash".to_string(),
                gemini_base_url: "http://127.0.0.1:9".to_string(),
            },
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client.lookup("Glycerin".to_string()).await.unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
