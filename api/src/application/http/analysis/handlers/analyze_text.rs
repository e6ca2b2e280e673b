use axum::extract::State;
use glowguard_core::domain::product_analysis::{
    entities::ProductAnalysis, ports::IngredientSafetyService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeProductResponse {
    pub data: ProductAnalysis,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "analysis",
    summary = "Analyze a product from ingredient text",
    description = "Splits the ingredient label on commas, semicolons and newlines, resolves every ingredient and aggregates a product safety verdict.",
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 400, description = "No ingredient names in the text"),
        (status = 422, description = "No ingredient could be resolved")
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let (details, text) = payload.into_parts();

    let product = state
        .service
        .analyze_text(details, text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: product }))
}
