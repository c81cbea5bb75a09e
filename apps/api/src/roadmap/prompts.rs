// Prompt constants for roadmap generation.
// Reuses the JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::roadmap::models::RoadmapRequest;

/// Replace `{career_details}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are a career development expert specializing in creating personalized skill development roadmaps.

Analyze the career details below and create a comprehensive skill development roadmap for someone pursuing this career.

Career Details:
{career_details}

The JSON object must follow this structure:
{
  "careerTitle": "The career title",
  "skillNodes": [
    {
      "id": "skill-1",
      "title": "Skill name",
      "description": "Brief description of the skill and why it's important",
      "timeframe": "0-3 months",
      "resources": [
        {"name": "Resource name", "url": "Resource URL"}
      ],
      "difficulty": "Beginner"
    }
  ]
}

"difficulty" is one of "Beginner", "Intermediate" or "Advanced".
Create 8-10 skill nodes total, organized in a logical progression from fundamental to advanced skills.
Make sure skills build upon one another where appropriate.
The roadmap should cover both technical and soft skills required for the career.
Provide realistic timeframes for each skill (0-3 months, 3-6 months, 6-12 months, 1-2 years).
For resources, include a mix of online courses, books, and practice opportunities.
"#;

pub fn build_roadmap_prompt(request: &RoadmapRequest) -> String {
    // RoadmapRequest is plain strings; serialization cannot fail.
    let details = serde_json::to_string_pretty(request).unwrap_or_default();
    format!(
        "{}\n{}",
        ROADMAP_PROMPT_TEMPLATE.replace("{career_details}", &details),
        JSON_ONLY_INSTRUCTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_career_details() {
        let request = RoadmapRequest {
            code: "29-1141.00".into(),
            title: "Registered Nurses".into(),
            description: "Assess patient health problems".into(),
            interests: vec!["Social".into()],
        };
        let prompt = build_roadmap_prompt(&request);
        assert!(prompt.contains("\"title\": \"Registered Nurses\""));
        assert!(prompt.contains("29-1141.00"));
        assert!(!prompt.contains("{career_details}"));
        assert!(prompt.contains("8-10 skill nodes"));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }
}
