use axum::extract::{Path, State};
use glowguard_core::domain::{
    ingredient::entities::IngredientAnalysis, product_analysis::ports::IngredientSafetyService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LookupIngredientResponse {
    pub data: IngredientAnalysis,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "ingredient",
    summary = "Look up a single ingredient",
    params(
        ("name" = String, Path, description = "Ingredient name"),
    ),
    responses(
        (status = 200, body = LookupIngredientResponse),
        (status = 404, description = "No source could resolve the ingredient")
    )
)]
pub async fn lookup_ingredient(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<LookupIngredientResponse>, ApiError> {
    let analysis = state
        .service
        .lookup_one(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LookupIngredientResponse { data: analysis }))
}
