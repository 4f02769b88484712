use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: String, errors: Option<Vec<String>>) -> Self {
        Self { error, errors }
    }
}
