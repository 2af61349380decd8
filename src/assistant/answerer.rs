use super::scope;
use crate::{
    config::Config,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
    rag::{Retriever, build_context_snippets},
};
use tracing::{error, info};

const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant for the Signifier sleep therapy device and related service ONLY.\n\
Answer strictly using the provided CONTEXT. If the answer is not in CONTEXT, reply:\n\
\"I can help with the Signifier device and support only. For other topics, please contact your clinician.\"\n\
NEVER provide medical advice, diagnosis, or treatment instructions. Keep answers to 1-3 sentences.\n\
At the end, include short bracket citations like [1], [2] that correspond to the provided context items.";

const EMPTY_QUESTION_REPLY: &str =
    "Please enter a question about the Signifier device or support.";

const SCOPE_REFUSAL_REPLY: &str = "I can help with the Signifier sleep therapy device and support only \
(setup, usage, troubleshooting, appointments). For other topics, please contact your clinician.";

const DEMO_FALLBACK_REPLY: &str = "I can help with the Signifier device and support only. \
For medical or out-of-scope questions, please contact your clinician.";

/// The outcome of one inquiry. Every failure mode degrades into an answer;
/// callers never see an error from the pipeline.
#[derive(Debug, Clone)]
pub struct InquiryAnswer {
    pub answer: String,
    pub citations: Option<Vec<String>>,
    pub note: Option<String>,
    pub error: Option<String>,
}

impl InquiryAnswer {
    fn plain(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            citations: None,
            note: None,
            error: None,
        }
    }
}

pub struct Assistant {
    llm_client: Box<dyn LlmClient>,
    retriever: Retriever,
    system_prompt: String,
    keywords: Vec<String>,
    top_k: usize,
    temperature: f32,
    max_tokens: u16,
}

impl Assistant {
    pub fn new(llm_client: Box<dyn LlmClient>, retriever: Retriever, config: &Config) -> Self {
        let system_prompt = config
            .llm
            .system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        Self {
            llm_client,
            retriever,
            system_prompt,
            keywords: config.scope.keywords.clone(),
            top_k: config.retrieval.top_k,
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
        }
    }

    pub async fn answer(&self, question: &str) -> InquiryAnswer {
        let question = question.trim();

        if question.is_empty() {
            info!("Q:<empty> | A:{}", EMPTY_QUESTION_REPLY);
            return InquiryAnswer::plain(EMPTY_QUESTION_REPLY);
        }

        info!("Q: {}", question);

        if !scope::in_scope(question, &self.keywords) {
            info!("A (scope-refusal): {}", SCOPE_REFUSAL_REPLY);
            return InquiryAnswer::plain(SCOPE_REFUSAL_REPLY);
        }

        // Retrieval failure is non-fatal: answer from an empty context
        let (context_block, citations) = match self.retriever.retrieve(question, self.top_k).await {
            Ok(snippets) => build_context_snippets(&snippets),
            Err(e) => {
                error!("Retrieval failed: {}", e);
                (String::new(), Vec::new())
            }
        };

        let context = if context_block.is_empty() {
            "NO RELEVANT CONTEXT FOUND".to_string()
        } else {
            context_block
        };

        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::system(format!("CONTEXT:\n{}", context)),
                ChatMessage::user(question),
            ],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        match self.llm_client.create_chat_completion(request).await {
            Ok(response) => {
                let content = response
                    .choices
                    .first()
                    .map(|choice| choice.message.content.clone())
                    .unwrap_or_default();
                let answer = scope::normalize_text(&content);

                info!("A: {}", answer);
                InquiryAnswer {
                    answer,
                    citations: Some(citations),
                    note: None,
                    error: None,
                }
            }
            Err(e) => {
                error!("LLM call failed: {}", e);
                info!("A (fallback): {}", DEMO_FALLBACK_REPLY);
                InquiryAnswer {
                    answer: DEMO_FALLBACK_REPLY.to_string(),
                    citations: Some(citations),
                    note: Some("demo_fallback".to_string()),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
