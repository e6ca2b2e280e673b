use super::handlers::{
    analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
    analyze_text::{__path_analyze_text, analyze_text},
    compare_products::{__path_compare_products, compare_products},
    summarize_ingredients::{__path_summarize_ingredients, summarize_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_text,
    analyze_ingredients,
    compare_products,
    summarize_ingredients
))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/analysis/text"), post(analyze_text))
        .route(
            &format!("{root_path}/analysis/ingredients"),
            post(analyze_ingredients),
        )
        .route(
            &format!("{root_path}/analysis/compare"),
            post(compare_products),
        )
        .route(
            &format!("{root_path}/analysis/summary"),
            post(summarize_ingredients),
        )
}
