// Roadmap Generator: prompt construction, payload extraction and mock fallback.
// Backend calls go through llm_client; nothing here talks HTTP directly.

use thiserror::Error;

use crate::llm_client::LlmError;

pub mod generator;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod parser;
pub mod prompts;

pub use generator::RoadmapGenerator;

/// Failures on the generated path. Never surfaced over HTTP.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generative backend failed: {0}")]
    Backend(#[from] LlmError),

    #[error("no JSON object found in generated text")]
    NoJsonObject,

    #[error("generated JSON did not match the roadmap shape: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("generated roadmap has no skill nodes")]
    EmptyRoadmap,
}
