use std::sync::Arc;

use crate::application::http::{
    analysis::router::analysis_routes, health::health_routes,
    ingredient::router::ingredient_routes, server::app_state::AppState,
    server::openapi::ApiDoc,
};
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use glowguard_core::{application::create_service, domain::common::EngineConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let engine_config = EngineConfig::from(args.as_ref().clone());
    let service = create_service(engine_config)?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(analysis_routes(state.clone()))
        .merge(ingredient_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Adds request metrics and the `/metrics` endpoint. Installs a process-wide recorder,
/// so call it once.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use serde_json::{Value, json};

    use super::*;

    fn test_server() -> TestServer {
        // Both remote sources point at a closed local port so lookups fall back
        // to the static database without network access.
        let args = Args::parse_from([
            "glowguard-api",
            "--gemini-api-key",
            "test-key",
            "--gemini-base-url",
            "http://127.0.0.1:9",
            "--literature-base-url",
            "http://127.0.0.1:9",
            "--literature-limit",
            "0",
            "--source-timeout-ms",
            "2000",
        ]);

        let app_state = state(Arc::new(args)).unwrap();
        TestServer::new(router(app_state).unwrap()).unwrap()
    }

    fn ingredient(name: &str, category: &str, score: u8) -> Value {
        json!({
            "ingredient": name,
            "category": category,
            "safety_score": score,
            "description": format!("{name} notes"),
            "sources": []
        })
    }

    fn product(id: &str, score: u8) -> Value {
        json!({
            "product_id": id,
            "name": format!("Product {id}"),
            "brand": "Acme",
            "overall_score": score,
            "ingredients": [ingredient("Water", "SAFE", score)],
            "recommendations": [],
            "safer_alternatives": [],
            "last_updated": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_server().get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_text_uses_static_fallback() {
        let response = test_server()
            .post("/analysis/text")
            .json(&json!({
                "product_id": "shampoo-1",
                "name": "Everyday Shampoo",
                "brand": "Acme",
                "text": "Sodium Lauryl Sulfate, Aloe Vera, Parabens"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let data = &body["data"];
        assert_eq!(data["product_id"], "shampoo-1");
        assert_eq!(data["overall_score"], 47);
        assert_eq!(data["ingredients"].as_array().unwrap().len(), 3);
        assert_eq!(data["ingredients"][0]["category"], "HARMFUL");
        assert!(
            data["recommendations"][1]
                .as_str()
                .unwrap()
                .starts_with("Avoid Sodium Lauryl Sulfate")
        );
        assert!(data["safer_alternatives"].as_array().unwrap().len() <= 3);
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_separator_only_text() {
        let response = test_server()
            .post("/analysis/text")
            .json(&json!({ "name": "Blank", "text": " , ; " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_ingredients_with_no_resolvable_names() {
        let response = test_server()
            .post("/analysis/ingredients")
            .json(&json!({
                "name": "Mystery",
                "ingredients": ["Unobtainium Resin"]
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert!(body["message"].as_str().unwrap().contains("Unobtainium Resin"));
    }

    #[tokio::test]
    async fn test_analyze_ingredients_validation() {
        let response = test_server()
            .post("/analysis/ingredients")
            .json(&json!({ "name": "Empty", "ingredients": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
    }

    #[tokio::test]
    async fn test_lookup_ingredient() {
        let server = test_server();

        let response = server.get("/ingredients/Glycerin").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["safety_score"], 95);

        server
            .get("/ingredients/Unobtainium")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_compare_tie_goes_to_first() {
        let response = test_server()
            .post("/analysis/compare")
            .json(&json!({ "first": product("a", 70), "second": product("b", 70) }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let data = &body["data"];
        assert_eq!(data["winner"], "first");
        assert_eq!(data["winner_id"], "a");
        assert_eq!(data["score_difference"], 0);
    }

    #[tokio::test]
    async fn test_summarize() {
        let response = test_server()
            .post("/analysis/summary")
            .json(&json!({
                "ingredients": [
                    ingredient("Sodium Lauryl Sulfate", "HARMFUL", 20),
                    ingredient("Aloe Vera", "SAFE", 90),
                    ingredient("Parabens", "HARMFUL", 30)
                ]
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let data = &body["data"];
        assert_eq!(data["total"], 3);
        assert_eq!(data["harmful"], 2);
        assert_eq!(data["overall_score"], 47);
        assert_eq!(data["safety_level"], "MODERATE");
    }

    #[tokio::test]
    async fn test_score_ranges_are_validated() {
        let server = test_server();

        let response = server
            .post("/analysis/compare")
            .json(&json!({ "first": product("a", 150), "second": product("b", 70) }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");

        let response = server
            .post("/analysis/summary")
            .json(&json!({ "ingredients": [ingredient("Water", "SAFE", 250)] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
    }

    #[tokio::test]
    async fn test_education() {
        let server = test_server();

        let response = server.get("/education/Methylparaben").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["title"], "Parabens");

        server
            .get("/education/Water")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_openapi_lists_engine_paths() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/analysis/text"));
        assert!(openapi.paths.paths.contains_key("/ingredients/{name}"));
    }
}
