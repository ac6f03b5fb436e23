// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Base URL of the content backend (hotels, tours, care services)
    pub content_api_url: String,

    /// Request timeout against the content backend, in seconds
    pub content_api_timeout: u64,

    /// Serve sample records when the content backend cannot be reached
    pub mock_fallback: bool,

    /// Model API key; empty means the analyzer only serves fallback profiles
    pub openai_api_key: String,

    /// Base URL of the chat-completions API
    pub openai_base_url: String,

    /// Model used for accessibility analysis
    pub openai_model: String,

    pub analysis_temperature: f32,

    pub analysis_max_tokens: u32,

    /// How long a model-generated profile stays cached, in seconds
    pub analysis_cache_ttl: u64,

    /// Model calls allowed per minute
    pub analysis_rate_limit: u32,

    /// Where the terminal client writes analysis reports
    pub reports_dir: String,
}

/// Read a variable and parse it, falling back to `default` when missing or malformed
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring malformed {}={:?}; using default", key, value);
            default
        }),
        Err(_) => default,
    }
}

/// Accepts true/false, 1/0, yes/no, on/off in any case
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_bool(&value).unwrap_or_else(|| {
            log::warn!("Ignoring malformed {}={:?}; using {}", key, value, default);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: parse_var("SERVER_PORT", 8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            content_api_url: env::var("CONTENT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),

            content_api_timeout: parse_var("CONTENT_API_TIMEOUT", 15),

            mock_fallback: parse_flag("MOCK_FALLBACK", true),

            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),

            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),

            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),

            analysis_temperature: parse_var("ANALYSIS_TEMPERATURE", 0.3),

            analysis_max_tokens: parse_var("ANALYSIS_MAX_TOKENS", 2000),

            analysis_cache_ttl: parse_var("ANALYSIS_CACHE_TTL", 3600),

            analysis_rate_limit: parse_var("ANALYSIS_RATE_LIMIT", 10),

            reports_dir: env::var("REPORTS_DIR")
                .unwrap_or_else(|_| "accessibility_reports".to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.content_api_url.trim().is_empty() {
            return Err("CONTENT_API_URL is required".to_string());
        }

        if let Err(e) = reqwest::Url::parse(&self.content_api_url) {
            return Err(format!(
                "CONTENT_API_URL is not a valid URL ({}): {}",
                self.content_api_url, e
            ));
        }

        if self.analysis_rate_limit == 0 {
            return Err("ANALYSIS_RATE_LIMIT must be greater than zero".to_string());
        }

        if self.openai_api_key.is_empty() {
            log::warn!("OPENAI_API_KEY not configured - analyzer will serve fallback profiles");
        }

        Ok(())
    }

    /// Whether a model key is available
    pub fn analyzer_enabled(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            content_api_url: "http://localhost:8080/api".to_string(),
            content_api_timeout: 15,
            mock_fallback: true,
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o".to_string(),
            analysis_temperature: 0.3,
            analysis_max_tokens: 2000,
            analysis_cache_ttl: 3600,
            analysis_rate_limit: 10,
            reports_dir: "accessibility_reports".to_string(),
        }
    }
}
