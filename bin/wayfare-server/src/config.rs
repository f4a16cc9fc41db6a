//! Server configuration, loaded from environment variables at startup.

use wayfare_agent::memory::DEFAULT_WINDOW_EXCHANGES;

/// Runtime configuration for wayfare-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set (the LLM key being the one thing you
/// will actually need for chat).
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// SQLite (or other) database URL (default: `"sqlite://wayfare.db"`).
    /// Any sqlx-compatible connection string works – swap the scheme to
    /// migrate to Postgres (`postgres://…`) or MySQL (`mysql://…`).
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI at `/swagger-ui` (default: true; disable in prod).
    pub enable_swagger: bool,

    /// Comma-separated CORS origin allow-list; unset means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Base URL of the OpenAI-compatible chat endpoint.
    pub llm_base_url: String,

    /// API key sent as a bearer token to the LLM provider.
    pub llm_api_key: String,

    /// Model identifier requested from the provider.
    pub llm_model: String,

    /// Conversation memory window, counted in user/ai exchanges.
    pub memory_window: usize,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("WAYFARE_BIND", "0.0.0.0:3000"),
            database_url: env_or("WAYFARE_DATABASE_URL", "sqlite://wayfare.db"),
            log_level: env_or("WAYFARE_LOG", "info"),
            log_json: env_flag("WAYFARE_LOG_JSON", false),
            enable_swagger: env_flag("WAYFARE_ENABLE_SWAGGER", true),
            cors_allowed_origins: std::env::var("WAYFARE_CORS_ORIGINS").ok(),
            llm_base_url: env_or("WAYFARE_LLM_BASE_URL", "https://api.openai.com/v1"),
            llm_api_key: env_or("WAYFARE_LLM_API_KEY", ""),
            llm_model: env_or("WAYFARE_LLM_MODEL", "gpt-4o-mini"),
            memory_window: parse_env("WAYFARE_MEMORY_WINDOW", DEFAULT_WINDOW_EXCHANGES),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
