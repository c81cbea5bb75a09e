//! Axum route handlers for saved careers and roadmaps. All require `AuthUser`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::roadmap::models::SkillRoadmap;
use crate::saves::models::{
    CareerDraft, CompletedSkills, RoadmapDraft, SavedCareer, SavedRoadmap,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCareerRequest {
    pub career_code: Option<String>,
    pub career_title: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoadmapRequest {
    pub career_code: Option<String>,
    pub career_title: Option<String>,
    pub roadmap_data: Option<SkillRoadmap>,
    pub notes: Option<String>,
    pub career_description: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSkillsRequest {
    pub completed_skills: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckQuery {
    pub career_code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCareerResponse {
    pub message: &'static str,
    pub saved_career: SavedCareer,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCareersResponse {
    pub saved_careers: Vec<SavedCareer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoadmapResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub saved_roadmap: SavedRoadmap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoadmapsResponse {
    pub saved_roadmaps: Vec<SavedRoadmap>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_saved: bool,
    pub saved_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveKind {
    Career,
    Roadmap,
}

impl SaveKind {
    fn parse(kind: Option<&str>) -> Result<Self, AppError> {
        match kind.map(str::trim).filter(|k| !k.is_empty()) {
            None | Some("career") => Ok(SaveKind::Career),
            Some("roadmap") => Ok(SaveKind::Roadmap),
            Some(other) => Err(AppError::Validation(format!(
                "Unknown save type '{other}', expected career or roadmap"
            ))),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SaveCareerRequest {
    fn into_draft(self) -> Result<CareerDraft, AppError> {
        match (present(self.career_code), present(self.career_title)) {
            (Some(career_code), Some(career_title)) => Ok(CareerDraft {
                career_code,
                career_title,
                notes: self.notes,
            }),
            _ => Err(AppError::Validation("Missing required fields".into())),
        }
    }
}

impl SaveRoadmapRequest {
    fn into_draft(self) -> Result<RoadmapDraft, AppError> {
        match (
            present(self.career_code),
            present(self.career_title),
            self.roadmap_data,
        ) {
            (Some(career_code), Some(career_title), Some(roadmap_data)) => Ok(RoadmapDraft {
                career_code,
                career_title,
                career_description: self.career_description,
                interests: self.interests,
                roadmap_data,
                notes: self.notes,
            }),
            _ => Err(AppError::Validation("Missing required fields".into())),
        }
    }
}

/// A malformed id cannot name a stored record, so it reads as not found.
fn record_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound(not_found.to_string()))
}

fn delete_id(request: DeleteRequest, not_found: &str) -> Result<Uuid, AppError> {
    let raw = present(request.id).ok_or_else(|| AppError::Validation("Missing save ID".into()))?;
    record_id(&raw, not_found)
}

const CAREER_NOT_FOUND: &str = "Saved career not found";
const ROADMAP_NOT_FOUND: &str = "Saved roadmap not found";

// ────────────────────────────────────────────────────────────────────────────
// Saved careers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/saves/career
pub async fn handle_save_career(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<SaveCareerRequest>,
) -> Result<Json<SavedCareerResponse>, AppError> {
    let draft = request.into_draft()?;
    let outcome = state.saves.save_career(&user.id, draft).await?;
    let message = if outcome.is_created() {
        "Career saved"
    } else {
        "Career updated"
    };
    Ok(Json(SavedCareerResponse {
        message,
        saved_career: outcome.into_inner(),
    }))
}

/// GET /api/saves/career
pub async fn handle_list_careers(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<SavedCareersResponse>, AppError> {
    let saved_careers = state.saves.list_careers(&user.id).await?;
    Ok(Json(SavedCareersResponse { saved_careers }))
}

/// DELETE /api/saves/career
pub async fn handle_delete_career(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<DeleteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = delete_id(request, CAREER_NOT_FOUND)?;
    if !state.saves.delete_career(&user.id, id).await? {
        return Err(AppError::NotFound(CAREER_NOT_FOUND.into()));
    }
    Ok(Json(MessageResponse {
        message: "Saved career deleted",
    }))
}

/// GET /api/saves/check?careerCode=&type=career|roadmap
pub async fn handle_check_saved(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<CheckQuery>,
) -> Result<Json<CheckResponse>, AppError> {
    let career_code = present(query.career_code)
        .ok_or_else(|| AppError::Validation("Missing careerCode parameter".into()))?;
    let saved_id = match SaveKind::parse(query.kind.as_deref())? {
        SaveKind::Career => state
            .saves
            .find_career(&user.id, &career_code)
            .await?
            .map(|c| c.id),
        SaveKind::Roadmap => state
            .saves
            .find_roadmap(&user.id, &career_code)
            .await?
            .map(|r| r.id),
    };
    Ok(Json(CheckResponse {
        is_saved: saved_id.is_some(),
        saved_id,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Saved roadmaps
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/saves/roadmap
pub async fn handle_save_roadmap(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<SaveRoadmapRequest>,
) -> Result<Json<SavedRoadmapResponse>, AppError> {
    let draft = request.into_draft()?;
    let outcome = state.saves.save_roadmap(&user.id, draft).await?;
    let message = if outcome.is_created() {
        "Roadmap saved"
    } else {
        "Roadmap updated"
    };
    Ok(Json(SavedRoadmapResponse {
        message: Some(message),
        saved_roadmap: outcome.into_inner(),
    }))
}

/// GET /api/saves/roadmap
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<SavedRoadmapsResponse>, AppError> {
    let saved_roadmaps = state.saves.list_roadmaps(&user.id).await?;
    Ok(Json(SavedRoadmapsResponse { saved_roadmaps }))
}

/// DELETE /api/saves/roadmap
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<DeleteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = delete_id(request, ROADMAP_NOT_FOUND)?;
    if !state.saves.delete_roadmap(&user.id, id).await? {
        return Err(AppError::NotFound(ROADMAP_NOT_FOUND.into()));
    }
    Ok(Json(MessageResponse {
        message: "Saved roadmap deleted",
    }))
}

/// GET /api/saves/roadmap/:id
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<String>,
) -> Result<Json<SavedRoadmapResponse>, AppError> {
    let id = record_id(&id, ROADMAP_NOT_FOUND)?;
    let saved_roadmap = state
        .saves
        .get_roadmap(&user.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(ROADMAP_NOT_FOUND.into()))?;
    Ok(Json(SavedRoadmapResponse {
        message: None,
        saved_roadmap,
    }))
}

/// PATCH /api/saves/roadmap/:id
///
/// Replaces `completedSkills` wholesale. Nothing else on the record changes.
pub async fn handle_update_completed_skills(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<String>,
    AppJson(request): AppJson<CompletedSkillsRequest>,
) -> Result<Json<SavedRoadmapResponse>, AppError> {
    let id = record_id(&id, ROADMAP_NOT_FOUND)?;
    let completed_skills: CompletedSkills = request
        .completed_skills
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or_else(|| AppError::Validation("Invalid completed skills data".into()))?;

    let saved_roadmap = state
        .saves
        .update_completed_skills(&user.id, id, completed_skills)
        .await?
        .ok_or_else(|| AppError::NotFound(ROADMAP_NOT_FOUND.into()))?;
    Ok(Json(SavedRoadmapResponse {
        message: Some("Completed skills updated"),
        saved_roadmap,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_type_defaults_to_career() {
        assert_eq!(SaveKind::parse(None).unwrap(), SaveKind::Career);
        assert_eq!(SaveKind::parse(Some("")).unwrap(), SaveKind::Career);
        assert_eq!(SaveKind::parse(Some("roadmap")).unwrap(), SaveKind::Roadmap);
        assert!(matches!(
            SaveKind::parse(Some("resume")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_career_request_requires_code_and_title() {
        let request = SaveCareerRequest {
            career_code: Some("  ".into()),
            career_title: Some("Chef".into()),
            notes: None,
        };
        assert!(matches!(request.into_draft(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_roadmap_request_requires_roadmap_data() {
        let request: SaveRoadmapRequest = serde_json::from_value(serde_json::json!({
            "careerCode": "35-1011.00",
            "careerTitle": "Chefs"
        }))
        .unwrap();
        assert!(request.into_draft().is_err());
    }

    #[test]
    fn test_malformed_id_reads_as_not_found() {
        assert!(matches!(
            record_id("not-a-uuid", ROADMAP_NOT_FOUND),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_id(DeleteRequest { id: None }, CAREER_NOT_FOUND),
            Err(AppError::Validation(_))
        ));
    }
}
