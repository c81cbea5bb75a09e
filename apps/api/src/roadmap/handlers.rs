//! Axum route handler for roadmap generation.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::roadmap::models::{RoadmapRequest, SkillRoadmap};
use crate::state::AppState;

/// POST /api/roadmaps/generate
///
/// Always answers with a usable roadmap once the request is valid.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    AppJson(mut request): AppJson<RoadmapRequest>,
) -> Result<Json<SkillRoadmap>, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    request.title = title.to_string();

    Ok(Json(state.roadmaps.generate_or_fallback(&request).await))
}
