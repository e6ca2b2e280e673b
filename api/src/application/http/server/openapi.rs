use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    ingredient::router::{EducationApiDoc, IngredientApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GlowGuard API"
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/education", api = EducationApiDoc),
    )
)]
pub struct ApiDoc;
