use crate::assistant::InquiryAnswer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct InquiryRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<InquiryAnswer> for InquiryResponse {
    fn from(answer: InquiryAnswer) -> Self {
        Self {
            answer: answer.answer,
            citations: answer.citations,
            note: answer.note,
            error: answer.error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
