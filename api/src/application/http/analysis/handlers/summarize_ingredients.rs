use axum::extract::State;
use glowguard_core::domain::product_analysis::{
    entities::SafetySummary, ports::IngredientSafetyService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::SummarizeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummarizeIngredientsResponse {
    pub data: SafetySummary,
}

#[utoipa::path(
    post,
    path = "/summary",
    tag = "analysis",
    summary = "Summarize ingredient analyses",
    responses(
        (status = 200, body = SummarizeIngredientsResponse)
    ),
    request_body = SummarizeIngredientsRequest
)]
pub async fn summarize_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SummarizeIngredientsRequest>,
) -> Result<Response<SummarizeIngredientsResponse>, ApiError> {
    let summary = state
        .service
        .summarize(&payload.ingredients)
        .map_err(ApiError::from)?;

    Ok(Response::OK(SummarizeIngredientsResponse { data: summary }))
}
