use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub llm: LLMConfig,
    pub literature: LiteratureConfig,
    pub lookup: LookupConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct LiteratureConfig {
    pub base_url: String,
    /// Articles attached per ingredient; 0 disables the literature search.
    pub limit: usize,
}

#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// Deadline for resolving a single ingredient, all sources included.
    pub lookup_timeout: Duration,
    /// Deadline for one call to one source.
    pub source_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(20),
            source_timeout: Duration::from_secs(8),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
