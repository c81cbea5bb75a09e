use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::saves::models::{
    CareerDraft, CompletedSkills, RoadmapDraft, SaveOutcome, SavedCareer, SavedRoadmap,
};

pub const CAREER_CONFLICT: &str = "You have already saved this career";
pub const ROADMAP_CONFLICT: &str = "You have already saved a roadmap for this career";

/// User-scoped persistence for saved careers and roadmaps.
///
/// Every operation is filtered by `user_id`: a record owned by someone else
/// behaves exactly like a missing one. Lists are ordered by `saved_at` descending.
#[async_trait]
pub trait SaveStore: Send + Sync {
    /// Creates the record or, if `(user_id, career_code)` already exists, updates its notes.
    async fn save_career(
        &self,
        user_id: &str,
        draft: CareerDraft,
    ) -> Result<SaveOutcome<SavedCareer>, AppError>;

    async fn list_careers(&self, user_id: &str) -> Result<Vec<SavedCareer>, AppError>;

    async fn find_career(
        &self,
        user_id: &str,
        career_code: &str,
    ) -> Result<Option<SavedCareer>, AppError>;

    /// Returns false when nothing owned by `user_id` matched.
    async fn delete_career(&self, user_id: &str, id: Uuid) -> Result<bool, AppError>;

    /// Creates the record or replaces the generated content of the existing one.
    async fn save_roadmap(
        &self,
        user_id: &str,
        draft: RoadmapDraft,
    ) -> Result<SaveOutcome<SavedRoadmap>, AppError>;

    async fn list_roadmaps(&self, user_id: &str) -> Result<Vec<SavedRoadmap>, AppError>;

    async fn get_roadmap(&self, user_id: &str, id: Uuid) -> Result<Option<SavedRoadmap>, AppError>;

    async fn find_roadmap(
        &self,
        user_id: &str,
        career_code: &str,
    ) -> Result<Option<SavedRoadmap>, AppError>;

    async fn delete_roadmap(&self, user_id: &str, id: Uuid) -> Result<bool, AppError>;

    /// Replaces `completed_skills` only. Returns the updated record.
    async fn update_completed_skills(
        &self,
        user_id: &str,
        id: Uuid,
        completed_skills: CompletedSkills,
    ) -> Result<Option<SavedRoadmap>, AppError>;
}
