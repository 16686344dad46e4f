// Shared prompt fragments.
// Each service that builds prompts keeps its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction block that pins the model to the supplied skills and bullets.
pub const ANTI_HALLUCINATION_INSTRUCTION: &str = "\
CRITICAL INSTRUCTIONS - ANTI-HALLUCINATION:
- ONLY use skills from the provided list below. Do NOT invent or add any skills not in this list.
- ONLY use bullet points from the provided experience. Do NOT create new achievements or experiences.
- Select the most relevant skills and customize bullet point emphasis based on the job requirements.";
