use axum::extract::State;
use glowguard_core::domain::product_analysis::ports::IngredientSafetyService;

use crate::application::http::{
    analysis::{
        handlers::analyze_text::AnalyzeProductResponse, validators::AnalyzeIngredientsRequest,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "analysis",
    summary = "Analyze a product from an ingredient list",
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 422, description = "No ingredient could be resolved")
    ),
    request_body = AnalyzeIngredientsRequest
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let (details, names) = payload.into_parts();

    let product = state
        .service
        .analyze_ingredients(details, names)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: product }))
}
