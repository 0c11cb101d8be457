use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(rename = "htmlContent")]
    pub html_content: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
