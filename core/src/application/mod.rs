use tracing::info;

use crate::{
    domain::common::{EngineConfig, services::Service},
    infrastructure::{
        literature::PubMedLiteratureClient, llm::GeminiIngredientClient,
        safety_db::StaticSafetyDatabase,
    },
};

pub type GlowGuardService =
    Service<GeminiIngredientClient, StaticSafetyDatabase, PubMedLiteratureClient>;

pub fn create_service(config: EngineConfig) -> Result<GlowGuardService, anyhow::Error> {
    let source_timeout = config.lookup.source_timeout;

    let live = GeminiIngredientClient::new(&config.llm, source_timeout)?;
    let literature = PubMedLiteratureClient::new(&config.literature, source_timeout)?;
    let safety_db = StaticSafetyDatabase::new();

    if config.llm.gemini_api_key.is_empty() {
        info!("no Gemini API key configured, ingredients resolve from the static database");
    }
    info!(
        static_records = safety_db.len(),
        literature_limit = config.literature.limit,
        "ingredient safety engine ready"
    );

    Ok(Service::new(
        live,
        safety_db,
        literature,
        config.lookup,
        config.literature.limit,
    ))
}
