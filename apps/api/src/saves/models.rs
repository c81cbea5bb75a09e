use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use uuid::Uuid;

use crate::roadmap::models::SkillRoadmap;

/// Skill id → completed flag.
pub type CompletedSkills = BTreeMap<String, bool>;

/// Row from `saved_careers`. At most one per `(user_id, career_code)`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedCareer {
    pub id: Uuid,
    pub user_id: String,
    pub career_code: String,
    pub career_title: String,
    pub notes: Option<String>,
    pub saved_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row from `saved_roadmaps`. At most one per `(user_id, career_code)`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoadmap {
    pub id: Uuid,
    pub user_id: String,
    pub career_code: String,
    pub career_title: String,
    pub career_description: Option<String>,
    pub interests: Option<Vec<String>>,
    pub roadmap_data: Json<SkillRoadmap>,
    pub completed_skills: Json<CompletedSkills>,
    pub notes: Option<String>,
    pub saved_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CareerDraft {
    pub career_code: String,
    pub career_title: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RoadmapDraft {
    pub career_code: String,
    pub career_title: String,
    pub career_description: Option<String>,
    pub interests: Option<Vec<String>>,
    pub roadmap_data: SkillRoadmap,
    pub notes: Option<String>,
}

/// Result of a create-or-update save.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome<T> {
    Created(T),
    Updated(T),
}

impl<T> SaveOutcome<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, SaveOutcome::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            SaveOutcome::Created(record) | SaveOutcome::Updated(record) => record,
        }
    }
}

impl SavedCareer {
    pub fn new(user_id: &str, draft: CareerDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            career_code: draft.career_code,
            career_title: draft.career_title,
            notes: draft.notes,
            saved_at: now,
            updated_at: now,
        }
    }
}

impl SavedRoadmap {
    pub fn new(user_id: &str, draft: RoadmapDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            career_code: draft.career_code,
            career_title: draft.career_title,
            career_description: draft.career_description,
            interests: draft.interests,
            roadmap_data: Json(draft.roadmap_data),
            completed_skills: Json(CompletedSkills::new()),
            notes: draft.notes,
            saved_at: now,
            updated_at: now,
        }
    }

    /// Re-save semantics: replaces the generated content and notes, keeps
    /// `completed_skills`, `career_title` and `saved_at`.
    pub fn apply_resave(&mut self, draft: RoadmapDraft, now: DateTime<Utc>) {
        self.roadmap_data = Json(draft.roadmap_data);
        self.notes = draft.notes;
        self.career_description = draft.career_description;
        self.interests = draft.interests;
        self.updated_at = now;
    }
}
