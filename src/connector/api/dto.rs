use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_RESULT_COUNT;

fn default_result_count() -> usize {
    DEFAULT_RESULT_COUNT
}

#[derive(Debug, Deserialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RetrieveQueryParams {
    /// The text to match against documents.
    pub query_text: String,

    /// Number of top documents to retrieve.
    #[serde(default = "default_result_count")]
    pub n: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub doc_id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RetrievedDocumentsResponse {
    pub documents: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
