use super::types::{HealthResponse, InquiryRequest, InquiryResponse};
use crate::assistant::Assistant;
use axum::{extract::State, response::Json};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

pub async fn inquiry(
    State(state): State<AppState>,
    Json(request): Json<InquiryRequest>,
) -> Json<InquiryResponse> {
    let answer = state.assistant.answer(&request.question).await;
    Json(InquiryResponse::from(answer))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
