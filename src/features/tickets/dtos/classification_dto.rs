use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FALLBACK_WARNING: &str = "LLM classification failed, using defaults.";

/// Request DTO for classification
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClassifyTicketDto {
    /// Free-text ticket description
    #[serde(default)]
    pub description: Option<String>,
}

/// Suggested category and priority for a description
///
/// `warning` is only present on the fallback result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResultDto {
    pub suggested_category: String,
    pub suggested_priority: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub warning: Option<String>,
}

impl ClassificationResultDto {
    pub fn fallback() -> Self {
        Self {
            suggested_category: "general".to_string(),
            suggested_priority: "medium".to_string(),
            warning: Some(FALLBACK_WARNING.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}
