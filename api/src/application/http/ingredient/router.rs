use super::handlers::{
    get_education::{__path_get_education, get_education},
    lookup_ingredient::{__path_lookup_ingredient, lookup_ingredient},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(lookup_ingredient))]
pub struct IngredientApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_education))]
pub struct EducationApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/ingredients/{{name}}"),
            get(lookup_ingredient),
        )
        .route(
            &format!("{root_path}/education/{{name}}"),
            get(get_education),
        )
}
