pub mod llm;
pub mod prompts;
pub mod types;
pub mod validation;
