//! Process-local `SaveStore` used when no database is configured.
//! Contents are lost on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::saves::models::{
    CareerDraft, CompletedSkills, RoadmapDraft, SaveOutcome, SavedCareer, SavedRoadmap,
};
use crate::saves::store::SaveStore;

#[derive(Default)]
pub struct InMemorySaveStore {
    careers: RwLock<Vec<SavedCareer>>,
    roadmaps: RwLock<Vec<SavedRoadmap>>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T: Clone>(
    records: &[T],
    owned: impl Fn(&T) -> bool,
    saved_at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
    let mut out: Vec<T> = records.iter().filter(|r| owned(*r)).cloned().collect();
    out.sort_by_key(|r| std::cmp::Reverse(saved_at(r)));
    out
}

#[async_trait]
impl SaveStore for InMemorySaveStore {
    async fn save_career(
        &self,
        user_id: &str,
        draft: CareerDraft,
    ) -> Result<SaveOutcome<SavedCareer>, AppError> {
        let mut careers = self.careers.write().await;
        let now = Utc::now();

        if let Some(existing) = careers
            .iter_mut()
            .find(|c| c.user_id == user_id && c.career_code == draft.career_code)
        {
            existing.notes = draft.notes;
            existing.updated_at = now;
            return Ok(SaveOutcome::Updated(existing.clone()));
        }

        let record = SavedCareer::new(user_id, draft, now);
        careers.push(record.clone());
        Ok(SaveOutcome::Created(record))
    }

    async fn list_careers(&self, user_id: &str) -> Result<Vec<SavedCareer>, AppError> {
        let careers = self.careers.read().await;
        Ok(newest_first(&careers, |c| c.user_id == user_id, |c| c.saved_at))
    }

    async fn find_career(
        &self,
        user_id: &str,
        career_code: &str,
    ) -> Result<Option<SavedCareer>, AppError> {
        let careers = self.careers.read().await;
        Ok(careers
            .iter()
            .find(|c| c.user_id == user_id && c.career_code == career_code)
            .cloned())
    }

    async fn delete_career(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let mut careers = self.careers.write().await;
        let before = careers.len();
        careers.retain(|c| !(c.id == id && c.user_id == user_id));
        Ok(careers.len() < before)
    }

    async fn save_roadmap(
        &self,
        user_id: &str,
        draft: RoadmapDraft,
    ) -> Result<SaveOutcome<SavedRoadmap>, AppError> {
        let mut roadmaps = self.roadmaps.write().await;
        let now = Utc::now();

        if let Some(existing) = roadmaps
            .iter_mut()
            .find(|r| r.user_id == user_id && r.career_code == draft.career_code)
        {
            existing.apply_resave(draft, now);
            return Ok(SaveOutcome::Updated(existing.clone()));
        }

        let record = SavedRoadmap::new(user_id, draft, now);
        roadmaps.push(record.clone());
        Ok(SaveOutcome::Created(record))
    }

    async fn list_roadmaps(&self, user_id: &str) -> Result<Vec<SavedRoadmap>, AppError> {
        let roadmaps = self.roadmaps.read().await;
        Ok(newest_first(&roadmaps, |r| r.user_id == user_id, |r| r.saved_at))
    }

    async fn get_roadmap(&self, user_id: &str, id: Uuid) -> Result<Option<SavedRoadmap>, AppError> {
        let roadmaps = self.roadmaps.read().await;
        Ok(roadmaps
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned())
    }

    async fn find_roadmap(
        &self,
        user_id: &str,
        career_code: &str,
    ) -> Result<Option<SavedRoadmap>, AppError> {
        let roadmaps = self.roadmaps.read().await;
        Ok(roadmaps
            .iter()
            .find(|r| r.user_id == user_id && r.career_code == career_code)
            .cloned())
    }

    async fn delete_roadmap(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let mut roadmaps = self.roadmaps.write().await;
        let before = roadmaps.len();
        roadmaps.retain(|r| !(r.id == id && r.user_id == user_id));
        Ok(roadmaps.len() < before)
    }

    async fn update_completed_skills(
        &self,
        user_id: &str,
        id: Uuid,
        completed_skills: CompletedSkills,
    ) -> Result<Option<SavedRoadmap>, AppError> {
        let mut roadmaps = self.roadmaps.write().await;
        Ok(roadmaps
            .iter_mut()
            .find(|r| r.id == id && r.user_id == user_id)
            .map(|r| {
                r.completed_skills.0 = completed_skills;
                r.updated_at = Utc::now();
                r.clone()
            }))
    }
}
