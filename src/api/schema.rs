use serde::{Serialize, Deserialize};

/// Successful response of the status API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: Option<T>
}

/// Body of the non-200 responses
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<serde_json::Value>
}

impl ErrorResponse {
    /// Error details as a plain string
    pub fn detail(&self) -> Option<String> {
        self.detail.as_ref().map(|detail| match detail {
            serde_json::Value::String(detail) => detail.clone(),
            detail => detail.to_string()
        })
    }
}
