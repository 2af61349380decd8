mod client;
mod types;

pub use client::{EmbeddingsClient, LlmClient, OpenAiClient};
pub use types::*;
