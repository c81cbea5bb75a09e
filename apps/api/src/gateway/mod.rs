//! Proxy Gateway: the single point of contact with the upstream occupational-data service.
//!
//! Credentials live here and nowhere else. Callers hand over a logical `path` plus
//! pass-through query parameters; the gateway injects Basic authentication and the
//! `client` parameter, and returns the upstream JSON body untouched.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::CatalogConfig;

pub mod handlers;

const USER_AGENT: &str = concat!("careerpath-api/", env!("CARGO_PKG_VERSION"));
pub const CLIENT_PARAM: &str = "client";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("upstream returned {status} {reason}")]
    Upstream { status: u16, reason: String },

    #[error("transport error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    InvalidPath(String),
}

/// Anything that can resolve an upstream `path + query` into a JSON body.
///
/// Carried in `AppState` as `Arc<dyn CatalogGateway>` so the catalog client and the
/// raw proxy endpoint can run against an in-process fake.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch(&self, path: &str, query: Vec<(String, String)>)
        -> Result<Value, GatewayError>;
}

/// reqwest-backed gateway to the real upstream service.
#[derive(Clone)]
pub struct ProxyGateway {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    client_id: String,
}

impl ProxyGateway {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            client_id: config.client_id.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogGateway for ProxyGateway {
    async fn fetch(
        &self,
        path: &str,
        mut query: Vec<(String, String)>,
    ) -> Result<Value, GatewayError> {
        let path = validate_path(path)?;

        if !query.iter().any(|(k, _)| k == CLIENT_PARAM) {
            query.push((CLIENT_PARAM.to_string(), self.client_id.clone()));
        }

        let url = format!("{}/{}", self.base_url, path);
        debug!("Proxying request to {url} with {} query params", query.len());

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header(header::ACCEPT, "application/json")
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream returned {status} for {path}: {body}");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                GatewayError::Decode(format!("Upstream returned invalid JSON: {e}"))
            } else {
                GatewayError::Network(e)
            }
        })
    }
}

/// Accepts only relative upstream resource paths such as `mnm/careers/15-1252.00/report`.
pub fn validate_path(path: &str) -> Result<&str, GatewayError> {
    let path = path.trim().trim_start_matches('/');
    if path.is_empty() {
        return Err(GatewayError::InvalidPath(
            "Path parameter is required".to_string(),
        ));
    }
    let forbidden = ["..", "://", "?", "#", "\\"];
    if forbidden.iter().any(|f| path.contains(f)) {
        return Err(GatewayError::InvalidPath(format!(
            "Invalid upstream path: {path}"
        )));
    }
    Ok(path)
}
