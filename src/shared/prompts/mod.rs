//! Prompt templates for completion calls.
//!
//! Templates are stored in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::Value;
use std::collections::HashMap;

use crate::features::tickets::models::{TicketCategory, TicketPriority};

/// System message sent with every classification request
pub const CLASSIFICATION_SYSTEM_PROMPT: &str = "You are a helpful support assistant.";

/// Render the ticket classification prompt for a description.
///
/// Both enumerations are listed in the prompt so the model answers with
/// known values.
pub fn render_classification_prompt(description: &str) -> Result<String, TemplateError> {
    let categories: Vec<&str> = TicketCategory::ALL.iter().map(|c| c.as_str()).collect();
    let priorities: Vec<&str> = TicketPriority::ALL.iter().map(|p| p.as_str()).collect();

    let mut ctx: HashMap<&str, Value> = HashMap::new();
    ctx.insert("categories", Value::from(categories));
    ctx.insert("priorities", Value::from(priorities));
    ctx.insert("description", Value::from(description));

    render_template("tickets/classify.jinja", &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_lists_enums_and_description() {
        let prompt = render_classification_prompt("I was charged twice this month").unwrap();

        assert!(prompt.contains("Categories: billing, technical, account, general"));
        assert!(prompt.contains("Priorities: low, medium, high, critical"));
        assert!(prompt.contains("Description: \"I was charged twice this month\""));
        assert!(prompt.contains("\"suggested_category\" and \"suggested_priority\""));
    }
}
