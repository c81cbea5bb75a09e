use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

/// One milestone in a roadmap. `id` is unique within its roadmap and keys `completedSkills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free text such as "0-3 months" or "1-2 years".
    pub timeframe: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRoadmap {
    pub career_title: String,
    pub skill_nodes: Vec<SkillNode>,
}

/// Career details embedded into the generation prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_roadmap_uses_camel_case_keys() {
        let roadmap = SkillRoadmap {
            career_title: "Nurse".into(),
            skill_nodes: vec![SkillNode {
                id: "skill-1".into(),
                title: "Anatomy".into(),
                description: "Basics".into(),
                timeframe: "0-3 months".into(),
                difficulty: Difficulty::Beginner,
                resources: None,
            }],
        };
        let value = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(value["careerTitle"], "Nurse");
        assert_eq!(value["skillNodes"][0]["difficulty"], "Beginner");
        assert!(value["skillNodes"][0].get("resources").is_none());
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let node = json!({
            "id": "a", "title": "t", "description": "d",
            "timeframe": "1-2 years", "difficulty": "Expert"
        });
        assert!(serde_json::from_value::<SkillNode>(node).is_err());
    }

    #[test]
    fn test_request_fields_default_when_absent() {
        let request: RoadmapRequest = serde_json::from_value(json!({"title": "Chef"})).unwrap();
        assert_eq!(request.title, "Chef");
        assert!(request.interests.is_empty());
        assert!(request.code.is_empty());
    }
}
