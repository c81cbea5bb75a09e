use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_ONET_BASE_URL: &str = "https://services.onetcenter.org/ws/";
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL URL. `None` selects the in-memory save store.
    pub database_url: Option<String>,
    pub catalog: CatalogConfig,
    pub generator: GeneratorConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Upstream occupational-data service reached through the proxy gateway.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Value injected as the `client` query parameter when the caller omits it.
    pub client_id: String,
    pub timeout: Duration,
}

/// Generative text backend used for roadmaps.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// `None` (or blank in the environment) means roadmaps come from the mock generator.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &str| {
            optional(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let username = require("ONET_USERNAME")?;
        let client_id = optional("ONET_CLIENT").unwrap_or_else(|| username.clone());

        Ok(Config {
            database_url: optional("DATABASE_URL"),
            catalog: CatalogConfig {
                base_url: optional("ONET_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_ONET_BASE_URL.to_string()),
                username,
                password: require("ONET_PASSWORD")?,
                client_id,
                timeout: parse_secs(optional("ONET_TIMEOUT_SECS"), 15, "ONET_TIMEOUT_SECS")?,
            },
            generator: GeneratorConfig {
                api_key: optional("GEMINI_API_KEY"),
                api_url: optional("GEMINI_API_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
                model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                timeout: parse_secs(optional("GEMINI_TIMEOUT_SECS"), 60, "GEMINI_TIMEOUT_SECS")?,
            },
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_secs(raw: Option<String>, default: u64, key: &str) -> Result<Duration> {
    let secs = match raw {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds"))?,
        None => default,
    };
    anyhow::ensure!(secs > 0, "{key} must be greater than zero");
    Ok(Duration::from_secs(secs))
}
