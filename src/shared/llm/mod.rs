//! Completion service access and reply parsing

pub mod client;
pub mod parser;

pub use client::{CompletionClient, CompletionError, CompletionRequest, OpenAiCompletionClient};
pub use parser::parse_json_reply;
