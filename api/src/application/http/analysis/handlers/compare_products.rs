use axum::extract::State;
use glowguard_core::domain::product_analysis::{
    entities::Comparison, ports::IngredientSafetyService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::CompareProductsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompareProductsResponse {
    pub data: Comparison,
}

#[utoipa::path(
    post,
    path = "/compare",
    tag = "analysis",
    summary = "Compare two analyzed products",
    description = "The product with the strictly higher overall score wins; a tie goes to the first product.",
    responses(
        (status = 200, body = CompareProductsResponse)
    ),
    request_body = CompareProductsRequest
)]
pub async fn compare_products(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CompareProductsRequest>,
) -> Result<Response<CompareProductsResponse>, ApiError> {
    let comparison = state.service.compare(&payload.first, &payload.second);

    Ok(Response::OK(CompareProductsResponse { data: comparison }))
}
