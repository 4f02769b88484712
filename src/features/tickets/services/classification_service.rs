use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::core::config::{LlmConfig, LlmCredentials};
use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::ClassificationResultDto;
use crate::features::tickets::models::{TicketCategory, TicketPriority};
use crate::shared::llm::{parse_json_reply, CompletionClient, CompletionError, CompletionRequest};
use crate::shared::prompts::{
    render_classification_prompt, TemplateError, CLASSIFICATION_SYSTEM_PROMPT,
};

/// Reply shape expected from the model; anything else is a failed suggestion
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuggestionPayload {
    suggested_category: String,
    suggested_priority: String,
}

/// Reasons a suggestion could not be produced. Never surfaced to clients.
#[derive(Debug, Error)]
enum ClassificationFailure {
    #[error("prompt rendering failed: {0}")]
    Prompt(#[from] TemplateError),

    #[error("{0}")]
    Completion(#[from] CompletionError),

    #[error("unparseable reply: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown suggestion: category={category}, priority={priority}")]
    UnknownValue { category: String, priority: String },
}

/// Suggests a category and priority for a ticket description
pub struct ClassificationService {
    client: Arc<dyn CompletionClient>,
    api_key_env: String,
    strict: bool,
}

impl ClassificationService {
    pub fn new(client: Arc<dyn CompletionClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            api_key_env: config.api_key_env.clone(),
            strict: config.strict_classification,
        }
    }

    /// Resolve the API credential from the environment as it is right now
    pub fn credentials(&self) -> LlmCredentials {
        LlmCredentials::from_env(&self.api_key_env)
    }

    /// Classify a description.
    ///
    /// A missing description or credential is an error and the completion
    /// service is not called. Every failure after that point yields the
    /// fallback suggestion instead of an error.
    pub async fn classify(
        &self,
        credentials: &LlmCredentials,
        description: Option<&str>,
    ) -> Result<ClassificationResultDto> {
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::BadRequest("Description is required".to_string()))?;

        let api_key = credentials.api_key().ok_or_else(|| {
            AppError::ServiceUnavailable("LLM API Key not configured".to_string())
        })?;

        match self.suggest(api_key, description).await {
            Ok(result) => {
                tracing::info!(
                    "Ticket classified: category={}, priority={}",
                    result.suggested_category,
                    result.suggested_priority
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("Ticket classification failed, using defaults: {}", e);
                Ok(ClassificationResultDto::fallback())
            }
        }
    }

    async fn suggest(
        &self,
        api_key: &str,
        description: &str,
    ) -> std::result::Result<ClassificationResultDto, ClassificationFailure> {
        let request = CompletionRequest {
            system_prompt: CLASSIFICATION_SYSTEM_PROMPT.to_string(),
            user_prompt: render_classification_prompt(description)?,
        };

        let reply = self.client.complete(api_key, &request).await?;
        let payload: SuggestionPayload = parse_json_reply(&reply)?;

        let known = payload.suggested_category.parse::<TicketCategory>().is_ok()
            && payload.suggested_priority.parse::<TicketPriority>().is_ok();

        if !known {
            if self.strict {
                return Err(ClassificationFailure::UnknownValue {
                    category: payload.suggested_category,
                    priority: payload.suggested_priority,
                });
            }
            tracing::warn!(
                "Suggestion outside known values passed through: category={}, priority={}",
                payload.suggested_category,
                payload.suggested_priority
            );
        }

        Ok(ClassificationResultDto {
            suggested_category: payload.suggested_category,
            suggested_priority: payload.suggested_priority,
            warning: None,
        })
    }
}
