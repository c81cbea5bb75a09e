//! Turns free-form generated text into a `SkillRoadmap`.
//!
//! `parse_structured_payload` is the only entry point callers use; the brace
//! scanner behind it can be replaced without touching them.

use crate::roadmap::models::SkillRoadmap;
use crate::roadmap::GenerationError;

pub fn parse_structured_payload(text: &str) -> Result<SkillRoadmap, GenerationError> {
    let object = extract_json_object(text).ok_or(GenerationError::NoJsonObject)?;
    let roadmap: SkillRoadmap = serde_json::from_str(object)?;
    if roadmap.skill_nodes.is_empty() {
        return Err(GenerationError::EmptyRoadmap);
    }
    Ok(roadmap)
}

/// Returns the first balanced `{...}` span in `text`.
///
/// Braces inside JSON string literals (including escaped quotes) do not count
/// toward nesting. Returns `None` when no object opens or the first one never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}
