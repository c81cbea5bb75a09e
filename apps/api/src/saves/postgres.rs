use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::saves::models::{
    CareerDraft, CompletedSkills, RoadmapDraft, SaveOutcome, SavedCareer, SavedRoadmap,
};
use crate::saves::store::{SaveStore, CAREER_CONFLICT, ROADMAP_CONFLICT};

const CAREER_COLUMNS: &str =
    "id, user_id, career_code, career_title, notes, saved_at, updated_at";
const ROADMAP_COLUMNS: &str = "id, user_id, career_code, career_title, career_description, \
    interests, roadmap_data, completed_skills, notes, saved_at, updated_at";

/// `SaveStore` backed by the `saved_careers` / `saved_roadmaps` tables.
///
/// Saves are read-then-write without a transaction. Two concurrent first saves
/// for the same key race on INSERT; the unique constraint turns the loser into
/// `AppError::Conflict`.
#[derive(Clone)]
pub struct PgSaveStore {
    pool: PgPool,
}

impl PgSaveStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn conflict_or(err: sqlx::Error, message: &str) -> AppError {
    if AppError::is_unique_violation(&err) {
        AppError::Conflict(message.to_string())
    } else {
        AppError::Database(err)
    }
}

#[async_trait]
impl SaveStore for PgSaveStore {
    async fn save_career(
        &self,
        user_id: &str,
        draft: CareerDraft,
    ) -> Result<SaveOutcome<SavedCareer>, AppError> {
        if let Some(existing) = self.find_career(user_id, &draft.career_code).await? {
            let updated = sqlx::query_as::<_, SavedCareer>(&format!(
                "UPDATE saved_careers SET notes = $1, updated_at = now() \
                 WHERE id = $2 RETURNING {CAREER_COLUMNS}"
            ))
            .bind(&draft.notes)
            .bind(existing.id)
            .fetch_optional(&self.pool)
            .await?;
            if let Some(updated) = updated {
                return Ok(SaveOutcome::Updated(updated));
            }
            // Deleted since the lookup: insert it afresh.
        }

        let created = sqlx::query_as::<_, SavedCareer>(&format!(
            "INSERT INTO saved_careers (id, user_id, career_code, career_title, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {CAREER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&draft.career_code)
        .bind(&draft.career_title)
        .bind(&draft.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_or(e, CAREER_CONFLICT))?;
        Ok(SaveOutcome::Created(created))
    }

    async fn list_careers(&self, user_id: &str) -> Result<Vec<SavedCareer>, AppError> {
        let rows = sqlx::query_as::<_, SavedCareer>(&format!(
            "SELECT {CAREER_COLUMNS} FROM saved_careers WHERE user_id = $1 ORDER BY saved_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_career(
        &self,
        user_id: &str,
        career_code: &str,
    ) -> Result<Option<SavedCareer>, AppError> {
        let row = sqlx::query_as::<_, SavedCareer>(&format!(
            "SELECT {CAREER_COLUMNS} FROM saved_careers WHERE user_id = $1 AND career_code = $2"
        ))
        .bind(user_id)
        .bind(career_code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_career(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_careers WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn save_roadmap(
        &self,
        user_id: &str,
        draft: RoadmapDraft,
    ) -> Result<SaveOutcome<SavedRoadmap>, AppError> {
        if let Some(existing) = self.find_roadmap(user_id, &draft.career_code).await? {
            let updated = sqlx::query_as::<_, SavedRoadmap>(&format!(
                "UPDATE saved_roadmaps SET roadmap_data = $1, notes = $2, \
                 career_description = $3, interests = $4, updated_at = now() \
                 WHERE id = $5 RETURNING {ROADMAP_COLUMNS}"
            ))
            .bind(Json(&draft.roadmap_data))
            .bind(&draft.notes)
            .bind(&draft.career_description)
            .bind(&draft.interests)
            .bind(existing.id)
            .fetch_optional(&self.pool)
            .await?;
            if let Some(updated) = updated {
                return Ok(SaveOutcome::Updated(updated));
            }
        }

        let created = sqlx::query_as::<_, SavedRoadmap>(&format!(
            "INSERT INTO saved_roadmaps \
                (id, user_id, career_code, career_title, career_description, interests, \
                 roadmap_data, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {ROADMAP_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&draft.career_code)
        .bind(&draft.career_title)
        .bind(&draft.career_description)
        .bind(&draft.interests)
        .bind(Json(&draft.roadmap_data))
        .bind(&draft.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_or(e, ROADMAP_CONFLICT))?;
        Ok(SaveOutcome::Created(created))
    }

    async fn list_roadmaps(&self, user_id: &str) -> Result<Vec<SavedRoadmap>, AppError> {
        let rows = sqlx::query_as::<_, SavedRoadmap>(&format!(
            "SELECT {ROADMAP_COLUMNS} FROM saved_roadmaps WHERE user_id = $1 ORDER BY saved_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_roadmap(&self, user_id: &str, id: Uuid) -> Result<Option<SavedRoadmap>, AppError> {
        let row = sqlx::query_as::<_, SavedRoadmap>(&format!(
            "SELECT {ROADMAP_COLUMNS} FROM saved_roadmaps WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_roadmap(
        &self,
        user_id: &str,
        career_code: &str,
    ) -> Result<Option<SavedRoadmap>, AppError> {
        let row = sqlx::query_as::<_, SavedRoadmap>(&format!(
            "SELECT {ROADMAP_COLUMNS} FROM saved_roadmaps WHERE user_id = $1 AND career_code = $2"
        ))
        .bind(user_id)
        .bind(career_code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_roadmap(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_roadmaps WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_completed_skills(
        &self,
        user_id: &str,
        id: Uuid,
        completed_skills: CompletedSkills,
    ) -> Result<Option<SavedRoadmap>, AppError> {
        let row = sqlx::query_as::<_, SavedRoadmap>(&format!(
            "UPDATE saved_roadmaps SET completed_skills = $1, updated_at = now() \
             WHERE id = $2 AND user_id = $3 RETURNING {ROADMAP_COLUMNS}"
        ))
        .bind(Json(&completed_skills))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
