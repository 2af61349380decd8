use async_trait::async_trait;
use inquiry_rust::{
    Error, Result,
    config::{Config, LlmConfig, LogsConfig, RetrievalConfig, ScopeConfig, ServerConfig},
    llm::{
        ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, EmbeddingsClient,
        LlmClient,
    },
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// Mock embeddings client for testing. Responses are queued per call, each
/// entry one batch of vectors.
#[derive(Debug, Default)]
pub struct MockEmbeddingsClient {
    pub batches: Arc<Mutex<Vec<Vec<Vec<f32>>>>>,
    pub requests: Arc<Mutex<Vec<Vec<String>>>>,
    pub error: Option<String>,
}

impl MockEmbeddingsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batches(self, batches: Vec<Vec<Vec<f32>>>) -> Self {
        *self.batches.lock().unwrap() = batches;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

#[async_trait]
impl EmbeddingsClient for MockEmbeddingsClient {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        self.requests.lock().unwrap().push(texts);

        if let Some(ref error) = self.error {
            return Err(Error::retrieval(error.clone()));
        }

        let mut batches = self.batches.lock().unwrap();
        if batches.is_empty() {
            return Err(Error::retrieval("No more mock embedding batches available"));
        }

        Ok(batches.remove(0))
    }
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            faq_path: "data/faqs.md".to_string(),
            store_path: "data/store.json".to_string(),
            frontend_dir: "frontend".to_string(),
        },
        llm: LlmConfig {
            provider: "openai".to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            system_prompt: None,
            temperature: 0.1,
            max_tokens: 220,
        },
        retrieval: RetrievalConfig::default(),
        scope: ScopeConfig::default(),
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "gpt-4o-mini".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("Stop".to_string()),
        }],
        usage: None,
    }
}
