// Resume generation: prompt construction, the completion call, and diffing the
// rewritten bullets against the originals they came from.
// All completion calls go through llm_client::AiProvider.

pub mod generator;
pub mod handlers;
pub mod prompts;
