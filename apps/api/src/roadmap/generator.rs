//! Roadmap generation with total fallback.
//!
//! Flow: build prompt → one backend call → extract JSON → parse → roadmap.
//! Any failure along that path yields the mock roadmap for the requested title.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::roadmap::mock::mock_roadmap;
use crate::roadmap::models::{RoadmapRequest, SkillRoadmap};
use crate::roadmap::parser::parse_structured_payload;
use crate::roadmap::prompts::build_roadmap_prompt;
use crate::roadmap::GenerationError;

#[derive(Clone)]
pub struct RoadmapGenerator {
    /// `None` when no backend credential is configured.
    backend: Option<Arc<dyn TextGenerator>>,
}

impl RoadmapGenerator {
    pub fn new(backend: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { backend }
    }

    /// Without a backend this returns the mock directly and makes no call.
    pub async fn generate(&self, request: &RoadmapRequest) -> Result<SkillRoadmap, GenerationError> {
        let Some(backend) = &self.backend else {
            info!("No generative backend configured, using mock roadmap");
            return Ok(mock_roadmap(&request.title));
        };

        let prompt = build_roadmap_prompt(request);
        let text = backend.generate_text(&prompt).await?;
        parse_structured_payload(&text)
    }

    /// Never fails: errors are logged and replaced by the mock roadmap.
    pub async fn generate_or_fallback(&self, request: &RoadmapRequest) -> SkillRoadmap {
        match self.generate(request).await {
            Ok(roadmap) => roadmap,
            Err(e) => {
                warn!(
                    "Roadmap generation failed for '{}', serving mock roadmap: {e}",
                    request.title
                );
                mock_roadmap(&request.title)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Replays one canned outcome for every call and counts calls.
    pub(crate) struct FakeGenerator {
        reply: Result<String, u16>,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        pub(crate) fn text(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "backend unavailable".into(),
                }),
            }
        }
    }

    fn request(title: &str) -> RoadmapRequest {
        RoadmapRequest {
            code: "15-1252.00".into(),
            title: title.into(),
            description: "Develop software".into(),
            interests: vec![],
        }
    }

    const GENERATED: &str = r#"Here you go: {"careerTitle": "Software Developers", "skillNodes": [
        {"id": "skill-1", "title": "Rust", "description": "Ownership", "timeframe": "3-6 months", "difficulty": "Intermediate"}
    ]} Hope this helps!"#;

    #[tokio::test]
    async fn test_generated_payload_is_extracted_from_prose() {
        let backend = FakeGenerator::text(GENERATED);
        let generator = RoadmapGenerator::new(Some(backend.clone()));
        let roadmap = generator.generate(&request("Software Developers")).await.unwrap();
        assert_eq!(roadmap.skill_nodes.len(), 1);
        assert_eq!(roadmap.skill_nodes[0].title, "Rust");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_mock() {
        let backend = FakeGenerator::failing(503);
        let generator = RoadmapGenerator::new(Some(backend.clone()));

        let err = generator.generate(&request("Actuaries")).await.unwrap_err();
        assert!(matches!(err, GenerationError::Backend(_)));

        let roadmap = generator.generate_or_fallback(&request("Actuaries")).await;
        assert_eq!(roadmap, mock_roadmap("Actuaries"));
        assert_eq!(roadmap.career_title, "Actuaries");
        assert_eq!(roadmap.skill_nodes.len(), 8);
        // One call per attempt, no retries.
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn test_unparsable_text_falls_back_to_mock() {
        let generator = RoadmapGenerator::new(Some(FakeGenerator::text("no json here")));
        let roadmap = generator.generate_or_fallback(&request("Welders")).await;
        assert_eq!(roadmap, mock_roadmap("Welders"));
    }

    #[tokio::test]
    async fn test_no_backend_short_circuits_to_mock() {
        let generator = RoadmapGenerator::new(None);
        let roadmap = generator.generate(&request("Welders")).await.unwrap();
        assert_eq!(roadmap, mock_roadmap("Welders"));
    }
}
