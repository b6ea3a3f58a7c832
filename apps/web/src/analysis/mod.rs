// Resume analysis: form parsing, model selection, prompt construction, generation.
// All remote calls go through llm_client::GenerativeService.

pub mod generator;
pub mod handlers;
pub mod model_selector;
pub mod page;
pub mod prompts;
pub mod submission;
