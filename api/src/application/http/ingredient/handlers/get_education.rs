use axum::extract::{Path, State};
use glowguard_core::domain::{
    education::entities::EducationEntry, product_analysis::ports::IngredientSafetyService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetEducationResponse {
    pub data: EducationEntry,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "education",
    summary = "Get education content for an ingredient",
    params(
        ("name" = String, Path, description = "Ingredient name"),
    ),
    responses(
        (status = 200, body = GetEducationResponse),
        (status = 404, description = "No education entry matches the ingredient")
    )
)]
pub async fn get_education(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetEducationResponse>, ApiError> {
    let entry = state
        .service
        .education_for(&name)
        .ok_or_else(|| ApiError::NotFound(format!("No education entry for '{}'", name)))?;

    Ok(Response::OK(GetEducationResponse { data: entry }))
}
