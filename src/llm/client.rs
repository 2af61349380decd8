use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

#[async_trait]
pub trait EmbeddingsClient: Send + Sync {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    embedding_model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            embedding_model: config.embedding_model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(messages)
            .temperature(request.temperature.unwrap_or(0.7));

        if let Some(max_tokens) = request.max_tokens {
            request_builder.max_tokens(max_tokens as u32);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices: Vec<Choice> = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage {
                    role: choice.message.role.to_string(),
                    content: choice.message.content.unwrap_or_default(),
                },
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}

#[async_trait]
impl EmbeddingsClient for OpenAiClient {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        debug!("Embedding {} texts with {}", texts.len(), self.embedding_model);

        let request = openai_types::CreateEmbeddingRequestArgs::default()
            .model(&self.embedding_model)
            .input(openai_types::EmbeddingInput::StringArray(texts))
            .build()?;

        let response = self.client.embeddings().create(request).await?;

        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }
}
