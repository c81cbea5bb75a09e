// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that expects a machine-readable answer.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with ONLY a JSON object. \
    Do NOT include explanations, preambles, or any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Make sure the JSON is valid and properly formatted.";
