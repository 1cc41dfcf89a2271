use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`. Exactly one of the two sources must be present.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub organization: Option<String>,
    pub document_url: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: error.into(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
