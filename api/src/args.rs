use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use glowguard_core::domain::common::{EngineConfig, LLMConfig, LiteratureConfig, LookupConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "glowguard-api", version, about = "Ingredient safety analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub literature: LiteratureArgs,

    #[command(flatten)]
    pub lookup: LookupArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LiteratureArgs {
    #[arg(
        long = "literature-base-url",
        env = "LITERATURE_BASE_URL",
        default_value = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils"
    )]
    pub base_url: String,

    #[arg(long = "literature-limit", env = "LITERATURE_LIMIT", default_value_t = 3)]
    pub limit: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LookupArgs {
    #[arg(long = "lookup-timeout-ms", env = "LOOKUP_TIMEOUT_MS", default_value_t = 20_000)]
    pub lookup_timeout_ms: u64,

    #[arg(long = "source-timeout-ms", env = "SOURCE_TIMEOUT_MS", default_value_t = 8_000)]
    pub source_timeout_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for EngineConfig {
    fn from(args: Args) -> Self {
        EngineConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            literature: LiteratureConfig {
                base_url: args.literature.base_url,
                limit: args.literature.limit,
            },
            lookup: LookupConfig {
                lookup_timeout: Duration::from_millis(args.lookup.lookup_timeout_ms),
                source_timeout: Duration::from_millis(args.lookup.source_timeout_ms),
            },
        }
    }
}
